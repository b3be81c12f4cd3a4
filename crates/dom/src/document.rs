//! The canonical in-memory document type and selection evaluation.

use dom_query::Matcher;

/// How the source markup was shaped when it was parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A whole page: serializes as the outer HTML of the root element.
    Full,
    /// Anything else: serializes as the contents the HTML5 parser placed
    /// under `head` and `body`, with no synthetic wrapper elements.
    Fragment,
}

/// A parsed HTML document, owned by the pipeline for the duration of one
/// transform call.
///
/// Documents are never mutated across pipeline stages: a transform action
/// may touch the tree it was handed, but its output is re-serialized and
/// re-parsed before the next stage sees it.
pub struct Document {
    dom: dom_query::Document,
    kind: DocumentKind,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("kind", &self.kind)
            .field("markup", &self.serialize())
            .finish()
    }
}

/// A selection is a document holding exactly the subtrees matched by one
/// selector evaluation; only provenance distinguishes the two. This is what
/// lets selectors run against selections and actions treat both uniformly.
pub type Selection = Document;

impl Document {
    /// Parse markup, sniffing whether it is a whole page or a fragment.
    pub fn parse(markup: &str) -> Document {
        let kind = if looks_like_full_document(markup) {
            DocumentKind::Full
        } else {
            DocumentKind::Fragment
        };
        Document {
            dom: dom_query::Document::from(markup),
            kind,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The underlying tree, for callers that need raw queries or mutation.
    pub fn dom(&self) -> &dom_query::Document {
        &self.dom
    }

    /// The top-level elements of the parsed markup: what the parser placed
    /// directly under `head` and `body`. Transform actions operate on these,
    /// the elements that sat at the root of the source text.
    pub fn roots(&self) -> dom_query::Selection {
        self.dom.select("head > *, body > *")
    }

    /// Evaluate a precompiled selector against this document.
    pub fn query(&self, matcher: &Matcher) -> dom_query::Selection {
        self.dom.select_matcher(matcher)
    }

    /// Serialize without any doctype. The doctype policy is applied by the
    /// caller after reconciliation, so selection keys always match the base
    /// text they are substituted into.
    pub fn serialize(&self) -> String {
        match self.kind {
            DocumentKind::Full => self.dom.select("html").html().to_string(),
            DocumentKind::Fragment => {
                let head = self.dom.select("head").inner_html();
                let body = self.dom.select("body").inner_html();
                format!("{head}{body}")
            }
        }
    }
}

/// The serialized text of every node matched by `matcher`, in document
/// order, concatenated.
pub fn matched_markup(document: &Document, matcher: &Matcher) -> String {
    let mut markup = String::new();
    for item in document.query(matcher).iter() {
        markup.push_str(&item.html());
    }
    markup
}

/// Evaluate `matcher` against `document`, returning the serialized original
/// match text and the match re-parsed as a standalone selection.
///
/// The matcher visits each node once, so matches are unique by node identity
/// and arrive in document order. An empty match yields an empty selection,
/// which later stages must tolerate.
pub fn select(document: &Document, matcher: &Matcher) -> (String, Selection) {
    let markup = matched_markup(document, matcher);
    let selection = Document::parse(&markup);
    (markup, selection)
}

fn looks_like_full_document(markup: &str) -> bool {
    let lead = markup.trim_start();
    starts_with_ignore_case(lead, "<!doctype") || starts_with_ignore_case(lead, "<html")
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_full_documents() {
        assert_eq!(
            Document::parse("<!DOCTYPE html><html><body></body></html>").kind(),
            DocumentKind::Full
        );
        assert_eq!(
            Document::parse("  <HTML lang=\"en\"></HTML>").kind(),
            DocumentKind::Full
        );
        assert_eq!(Document::parse("<div>x</div>").kind(), DocumentKind::Fragment);
        assert_eq!(Document::parse("plain text").kind(), DocumentKind::Fragment);
    }

    #[test]
    fn fragment_round_trips() {
        let markup = r#"<div id="x" class="a"><p>Name</p></div>"#;
        let doc = Document::parse(markup);
        assert_eq!(doc.serialize(), markup);
    }

    #[test]
    fn fragment_keeps_sibling_text() {
        let doc = Document::parse("<p>a</p> tail <p>b</p>");
        assert_eq!(doc.serialize(), "<p>a</p> tail <p>b</p>");
    }

    #[test]
    fn full_document_serializes_root() {
        let doc = Document::parse("<html><head></head><body><p>x</p></body></html>");
        assert_eq!(
            doc.serialize(),
            "<html><head></head><body><p>x</p></body></html>"
        );
    }

    #[test]
    fn select_concatenates_matches_in_document_order() {
        let doc = Document::parse("<ul><li>a</li><li>b</li></ul>");
        let matcher = Matcher::new("li").unwrap();
        let (markup, selection) = select(&doc, &matcher);
        assert_eq!(markup, "<li>a</li><li>b</li>");
        assert_eq!(selection.serialize(), "<li>a</li><li>b</li>");
    }

    #[test]
    fn select_with_no_match_is_empty() {
        let doc = Document::parse("<p>x</p>");
        let matcher = Matcher::new(".missing").unwrap();
        let (markup, selection) = select(&doc, &matcher);
        assert!(markup.is_empty());
        assert_eq!(selection.serialize(), "");
    }

    #[test]
    fn roots_are_top_level_elements_only() {
        let doc = Document::parse("<div><span>inner</span></div><p>second</p>");
        assert_eq!(doc.roots().length(), 2);
    }
}
