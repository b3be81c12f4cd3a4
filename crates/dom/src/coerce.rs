//! Normalizing heterogeneous transform inputs into the canonical document
//! type.
//!
//! This adapter runs before every selector evaluation and after every
//! transform action, so it is the single place that decides what counts as
//! HTML-like; every other component relies on its contract.

use crate::document::Document;
use crate::error::CoercionError;

/// The value shapes the adapter accepts, as an explicit tagged union.
///
/// Transform actions return one of these; the chain executor coerces it back
/// into a [`Document`] before the next action runs.
pub enum Coercible {
    /// Raw markup text.
    Markup(String),
    /// Raw bytes, validated as UTF-8 before parsing.
    Bytes(Vec<u8>),
    /// A sequence of items, stringified and joined with a single space.
    Fragments(Vec<Coercible>),
    /// An already-parsed document or selection.
    Parsed(Document),
}

impl Coercible {
    /// Flatten to markup text without building a tree.
    pub fn to_markup(&self) -> Result<String, CoercionError> {
        match self {
            Coercible::Markup(text) => Ok(text.clone()),
            Coercible::Bytes(bytes) => Ok(String::from_utf8(bytes.clone())?),
            Coercible::Fragments(items) => {
                let parts = items
                    .iter()
                    .map(Coercible::to_markup)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(parts.join(" "))
            }
            Coercible::Parsed(document) => Ok(document.serialize()),
        }
    }
}

impl From<String> for Coercible {
    fn from(text: String) -> Self {
        Coercible::Markup(text)
    }
}

impl From<&str> for Coercible {
    fn from(text: &str) -> Self {
        Coercible::Markup(text.to_string())
    }
}

impl From<Document> for Coercible {
    fn from(document: Document) -> Self {
        Coercible::Parsed(document)
    }
}

impl From<Vec<String>> for Coercible {
    fn from(items: Vec<String>) -> Self {
        Coercible::Fragments(items.into_iter().map(Coercible::Markup).collect())
    }
}

/// Coerce `input` into a document.
///
/// An already-parsed document passes through untouched unless
/// `force_reparse` is set, in which case it is re-serialized and re-parsed
/// so the result is materialized from text rather than aliasing a live
/// tree. The chain executor always forces a reparse; selector evaluation
/// does not.
pub fn coerce(input: Coercible, force_reparse: bool) -> Result<Document, CoercionError> {
    match input {
        Coercible::Parsed(document) if !force_reparse => Ok(document),
        other => Ok(Document::parse(&other.to_markup()?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_parses() {
        let doc = coerce(Coercible::from("<p>x</p>"), false).unwrap();
        assert_eq!(doc.serialize(), "<p>x</p>");
    }

    #[test]
    fn fragments_join_with_a_single_space() {
        let items: Coercible = vec!["<p>a</p>".to_string(), "<p>b</p>".to_string()].into();
        assert_eq!(items.to_markup().unwrap(), "<p>a</p> <p>b</p>");
    }

    #[test]
    fn parsed_is_identity_without_reparse() {
        let doc = Document::parse("<p>x</p>");
        let same = coerce(Coercible::Parsed(doc), false).unwrap();
        assert_eq!(same.serialize(), "<p>x</p>");
    }

    #[test]
    fn reparse_materializes_from_text() {
        let doc = Document::parse("<p>x</p>");
        let reparsed = coerce(Coercible::Parsed(doc), true).unwrap();
        assert_eq!(reparsed.serialize(), "<p>x</p>");
    }

    #[test]
    fn invalid_utf8_fails() {
        let result = coerce(Coercible::Bytes(vec![0xff, 0xfe]), false);
        assert!(matches!(result, Err(CoercionError::InvalidUtf8(_))));
    }
}
