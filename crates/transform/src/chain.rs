//! Folding an ordered action chain over one selection.

use std::sync::Arc;

use reweave_dom::{Selection, coerce};

use crate::{Transform, TransformError};

/// Apply `chain` left to right: each action sees only the output of the one
/// before it.
///
/// The output of every action is re-serialized and re-parsed before the next
/// action runs, so each step works on a document fully materialized from the
/// previous step's text; no action can observe another's in-place mutations
/// through a shared tree.
pub fn apply_chain(
    selection: Selection,
    chain: &[Arc<dyn Transform>],
) -> Result<Selection, TransformError> {
    chain.iter().try_fold(selection, |acc, action| {
        log::trace!("applying transform '{}'", action.name());
        let produced = action.apply(acc)?;
        coerce(produced, true).map_err(|source| TransformError::NonCoercible {
            action: action.name().to_string(),
            source,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FnTransform;
    use reweave_dom::{Coercible, Document};

    fn wrap_in(tag: &'static str) -> Arc<dyn Transform> {
        Arc::new(FnTransform::new(format!("wrap-{tag}"), move |sel: Selection| {
            Ok(Coercible::Markup(format!(
                "<{tag}>{}</{tag}>",
                sel.serialize()
            )))
        }))
    }

    #[test]
    fn empty_chain_is_identity() {
        let selection = Document::parse("<p>x</p>");
        let out = apply_chain(selection, &[]).unwrap();
        assert_eq!(out.serialize(), "<p>x</p>");
    }

    #[test]
    fn actions_apply_in_order() {
        let selection = Document::parse("<p>x</p>");
        let chain = vec![wrap_in("em"), wrap_in("div")];
        let out = apply_chain(selection, &chain).unwrap();
        assert_eq!(out.serialize(), "<div><em><p>x</p></em></div>");
    }

    #[test]
    fn failures_identify_the_action() {
        let failing: Arc<dyn Transform> = Arc::new(FnTransform::new("boom", |_sel| {
            Err(TransformError::failed("boom", "no good"))
        }));
        let err = apply_chain(Document::parse("<p>x</p>"), &[failing]).unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn non_coercible_output_identifies_the_action() {
        let bad: Arc<dyn Transform> = Arc::new(FnTransform::new("bytes", |_sel| {
            Ok(Coercible::Bytes(vec![0xff, 0xfe]))
        }));
        let err = apply_chain(Document::parse("<p>x</p>"), &[bad]).unwrap_err();
        match err {
            TransformError::NonCoercible { action, .. } => assert_eq!(action, "bytes"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
