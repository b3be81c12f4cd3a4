//! Allow-list HTML sanitization.

use std::collections::HashSet;

use reweave_dom::{Coercible, Document, Selection};
use reweave_transform::{Transform, TransformError};

/// Tags kept by the default policy.
const DEFAULT_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "address", "area", "b", "big", "blockquote", "br", "button",
    "caption", "center", "cite", "code", "col", "colgroup", "dd", "del", "dfn", "dir", "div",
    "dl", "dt", "em", "fieldset", "font", "form", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i",
    "img", "input", "ins", "kbd", "label", "legend", "li", "map", "menu", "ol", "optgroup",
    "option", "p", "pre", "q", "s", "samp", "select", "small", "span", "strike", "strong",
    "sub", "sup", "table", "tbody", "td", "textarea", "tfoot", "th", "thead", "tr", "tt", "u",
    "ul", "var",
];

/// Attributes kept by the default policy.
const DEFAULT_ATTRS: &[&str] = &[
    "abbr", "accept", "accept-charset", "accesskey", "action", "align", "alt", "axis",
    "border", "cellpadding", "cellspacing", "char", "charoff", "charset", "checked", "cite",
    "class", "clear", "cols", "colspan", "color", "compact", "coords", "datetime", "dir",
    "disabled", "enctype", "for", "frame", "headers", "height", "href", "hreflang", "hspace",
    "id", "ismap", "label", "lang", "longdesc", "maxlength", "media", "method", "multiple",
    "name", "nohref", "noshade", "nowrap", "prompt", "readonly", "rel", "rev", "rows",
    "rowspan", "rules", "scope", "selected", "shape", "size", "span", "src", "start",
    "summary", "tabindex", "target", "title", "type", "usemap", "valign", "value", "vspace",
    "width",
];

/// Attributes whose values are URIs and get scheme-checked.
const DEFAULT_URI_ATTRS: &[&str] = &["action", "background", "cite", "href", "longdesc", "src", "usemap"];

const DEFAULT_SCHEMES: &[&str] = &["file", "ftp", "http", "https", "mailto"];

/// An allow-list sanitizer policy.
///
/// Disallowed elements are removed together with their content, disallowed
/// attributes are stripped, and URI-valued attributes must carry a safe
/// scheme (relative URIs pass). There is no global policy: construct one
/// explicitly and hand it to [`Sanitize`], or use the default.
pub struct Sanitizer {
    allowed_tags: HashSet<String>,
    allowed_attrs: HashSet<String>,
    uri_attrs: HashSet<String>,
    safe_schemes: HashSet<String>,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Sanitizer {
            allowed_tags: to_set(DEFAULT_TAGS),
            allowed_attrs: to_set(DEFAULT_ATTRS),
            uri_attrs: to_set(DEFAULT_URI_ATTRS),
            safe_schemes: to_set(DEFAULT_SCHEMES),
        }
    }
}

fn to_set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl Sanitizer {
    /// Replace the allowed tag set.
    pub fn with_allowed_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the allowed attribute set.
    pub fn with_allowed_attrs<I, S>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_attrs = attrs.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the safe URI scheme set.
    pub fn with_safe_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.safe_schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    /// Strip everything the policy disallows, in place.
    pub fn sanitize(&self, document: &Document) {
        for element in document.dom().select("*").iter() {
            let Some(node) = element.nodes().first().cloned() else {
                continue;
            };
            let Some(name) = node.node_name() else {
                continue;
            };
            let tag = name.to_string().to_ascii_lowercase();
            // html/head/body are parser scaffolding, not content.
            if matches!(tag.as_str(), "html" | "head" | "body") {
                continue;
            }
            if !self.allowed_tags.contains(&tag) {
                log::debug!("sanitizer removing element '{tag}'");
                element.remove();
                continue;
            }
            let attrs: Vec<(String, String)> = node
                .attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            for (attr_name, value) in attrs {
                let lower = attr_name.to_ascii_lowercase();
                if !self.allowed_attrs.contains(&lower) {
                    element.remove_attr(&attr_name);
                } else if self.uri_attrs.contains(&lower) && !self.scheme_allowed(&value) {
                    log::debug!("sanitizer stripping unsafe URI in '{attr_name}'");
                    element.remove_attr(&attr_name);
                }
            }
        }
    }

    fn scheme_allowed(&self, value: &str) -> bool {
        // Whitespace and control characters are dropped before looking for a
        // scheme, closing the `jav\tascript:` obfuscation hole.
        let cleaned: String = value
            .chars()
            .filter(|c| !c.is_whitespace() && !c.is_control())
            .collect();
        match cleaned.split_once(':') {
            Some((scheme, _))
                if !scheme.contains('/') && !scheme.contains('?') && !scheme.contains('#') =>
            {
                self.safe_schemes.contains(&scheme.to_ascii_lowercase())
            }
            // No scheme part: a relative URI, or a ':' after the path began.
            _ => true,
        }
    }
}

/// Runs a sanitizer policy over the selection.
pub struct Sanitize {
    policy: Sanitizer,
}

impl Sanitize {
    pub fn new() -> Self {
        Sanitize {
            policy: Sanitizer::default(),
        }
    }

    pub fn with_policy(policy: Sanitizer) -> Self {
        Sanitize { policy }
    }
}

impl Default for Sanitize {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform for Sanitize {
    fn name(&self) -> &str {
        "sanitize"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        self.policy.sanitize(&selection);
        Ok(Coercible::Parsed(selection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_checks() {
        let policy = Sanitizer::default();
        assert!(policy.scheme_allowed("https://example.com"));
        assert!(policy.scheme_allowed("/relative/path"));
        assert!(policy.scheme_allowed("page.html?q=a:b"));
        assert!(!policy.scheme_allowed("javascript:alert(1)"));
        assert!(!policy.scheme_allowed("jav\tascript:alert(1)"));
        assert!(!policy.scheme_allowed("VBSCRIPT:foo"));
    }

    #[test]
    fn removes_disallowed_elements_and_attributes() {
        let doc = Document::parse(
            r#"<div onclick="steal()"><script>evil()</script><p>keep</p></div>"#,
        );
        Sanitizer::default().sanitize(&doc);
        assert_eq!(doc.serialize(), "<div><p>keep</p></div>");
    }

    #[test]
    fn strips_unsafe_uri_attributes() {
        let doc = Document::parse(r#"<a href="javascript:alert(1)">x</a>"#);
        Sanitizer::default().sanitize(&doc);
        assert_eq!(doc.serialize(), "<a>x</a>");
    }
}
