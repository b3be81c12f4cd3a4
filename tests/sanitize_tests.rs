mod common;

use common::{TestResult, transform};
use reweave::{Rule, Sanitize, Sanitizer, Transformer};
use serde_json::json;
use std::sync::Arc;

#[test]
fn sanitize_action_strips_scripts_and_handlers() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let html = r#"<div class="c"><script>steal()</script><p onclick="x()">safe</p></div>"#;
    let out = transform(html, &json!([".c", ["sanitize", null]]))?;
    assert_eq!(out, r#"<!DOCTYPE html><div class="c"><p>safe</p></div>"#);
    Ok(())
}

#[test]
fn sanitize_keeps_safe_markup_untouched() -> TestResult {
    let html = r#"<div class="c"><a href="https://example.com" title="t">link</a></div>"#;
    let out = transform(html, &json!([".c", ["sanitize", null]]))?;
    assert_eq!(out, format!("<!DOCTYPE html>{html}"));
    Ok(())
}

#[test]
fn sanitize_drops_unsafe_uri_schemes() -> TestResult {
    let html = r#"<div class="c"><a href="javascript:alert(1)">x</a></div>"#;
    let out = transform(html, &json!([".c", ["sanitize", null]]))?;
    assert_eq!(out, r#"<!DOCTYPE html><div class="c"><a>x</a></div>"#);
    Ok(())
}

#[test]
fn iframes_and_embedded_content_are_removed() -> TestResult {
    let html = r#"<div class="c"><iframe src="https://ads.example"></iframe><p>text</p></div>"#;
    let out = transform(html, &json!([".c", ["sanitize", null]]))?;
    assert_eq!(out, r#"<!DOCTYPE html><div class="c"><p>text</p></div>"#);
    Ok(())
}

#[test]
fn a_custom_policy_replaces_the_default() -> TestResult {
    let policy = Sanitizer::default().with_allowed_tags(["p"]);
    let action: Arc<dyn reweave::Transform> = Arc::new(Sanitize::with_policy(policy));
    let rules = vec![Rule::new(".c", vec![action])];

    let out = Transformer::new().transform_string(
        r#"<div class="c"><p>keep</p><span>drop</span></div>"#,
        &rules,
    )?;
    // The div itself is outside the custom allow-list, so the whole
    // selection is removed.
    assert_eq!(out, "<!DOCTYPE html>");
    Ok(())
}

#[test]
fn a_permissive_policy_can_keep_extra_attributes() -> TestResult {
    let policy = Sanitizer::default().with_allowed_attrs(["class", "data-track"]);
    let action: Arc<dyn reweave::Transform> = Arc::new(Sanitize::with_policy(policy));
    let rules = vec![Rule::new(".c", vec![action])];

    let out = Transformer::new().transform_string(
        r#"<div class="c" data-track="7" id="gone">x</div>"#,
        &rules,
    )?;
    assert_eq!(out, r#"<!DOCTYPE html><div class="c" data-track="7">x</div>"#);
    Ok(())
}
