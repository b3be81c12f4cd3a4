//! Sub-selection: narrowing a selection with another selector.

use dom_query::Matcher;

use reweave_dom::{Coercible, Selection, matched_markup};
use reweave_transform::{Transform, TransformError};

/// Narrows the selection to the nodes matching a sub-selector within it.
///
/// The selector runs against the selection as its own document, so the
/// result can itself be transformed or narrowed again.
pub struct CssSelect {
    selector: String,
}

impl CssSelect {
    pub fn new(selector: impl Into<String>) -> Self {
        CssSelect {
            selector: selector.into(),
        }
    }
}

impl Transform for CssSelect {
    fn name(&self) -> &str {
        "cssSelect"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        let matcher = Matcher::new(&self.selector).map_err(|e| {
            TransformError::failed(
                self.name(),
                format!("invalid selector '{}': {e:?}", self.selector),
            )
        })?;
        Ok(Coercible::Markup(matched_markup(&selection, &matcher)))
    }
}
