//! Serialization options for rendered output.

/// Doctype emission policy: an explicit three-state option rather than a
/// default guessed from absence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Doctype {
    /// Emit the HTML5 doctype.
    #[default]
    Html5,
    /// Emit `<!DOCTYPE ...>` with the given body.
    Custom(String),
    /// Emit no doctype.
    Omit,
}

/// Options applied when rendering the final document text.
#[derive(Debug, Clone, Default)]
pub struct SerializeOptions {
    pub doctype: Doctype,
}

impl Doctype {
    /// Apply the policy to serialized markup, replacing whatever doctype the
    /// source carried.
    pub fn apply(&self, markup: &str) -> String {
        let body = strip_doctype(markup);
        match self {
            Doctype::Html5 => format!("<!DOCTYPE html>{body}"),
            Doctype::Custom(value) => format!("<!DOCTYPE {value}>{body}"),
            Doctype::Omit => body.to_string(),
        }
    }
}

fn strip_doctype(markup: &str) -> &str {
    let lead = markup.trim_start();
    let has_doctype = lead
        .get(..9)
        .is_some_and(|head| head.eq_ignore_ascii_case("<!doctype"));
    if !has_doctype {
        return markup;
    }
    match lead.find('>') {
        Some(end) => &lead[end + 1..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_html5() {
        assert_eq!(Doctype::default().apply("<p>x</p>"), "<!DOCTYPE html><p>x</p>");
    }

    #[test]
    fn custom_value_is_emitted() {
        let doctype = Doctype::Custom("html5".to_string());
        assert_eq!(doctype.apply("<p>x</p>"), "<!DOCTYPE html5><p>x</p>");
    }

    #[test]
    fn omit_emits_nothing() {
        assert_eq!(Doctype::Omit.apply("<p>x</p>"), "<p>x</p>");
    }

    #[test]
    fn existing_doctype_is_replaced() {
        assert_eq!(
            Doctype::Html5.apply("<!doctype HTML><html></html>"),
            "<!DOCTYPE html><html></html>"
        );
        assert_eq!(
            Doctype::Omit.apply("<!DOCTYPE html><html></html>"),
            "<html></html>"
        );
    }
}
