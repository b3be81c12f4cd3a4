//! Sibling-level actions: insertion around, replacement of, and removal of
//! the selected nodes.

use reweave_dom::{Coercible, Selection};
use reweave_transform::{Transform, TransformError};

use super::markup_argument;

/// Inserts markup immediately before every selected node.
pub struct Before {
    markup: Coercible,
}

impl Before {
    pub fn new(markup: impl Into<Coercible>) -> Self {
        Before {
            markup: markup.into(),
        }
    }
}

impl Transform for Before {
    fn name(&self) -> &str {
        "before"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        let markup = markup_argument(self.name(), &self.markup)?;
        for node in selection.roots().iter() {
            let original = node.html();
            node.replace_with_html(format!("{markup}{original}"));
        }
        Ok(Coercible::Parsed(selection))
    }
}

/// Inserts markup immediately after every selected node.
pub struct After {
    markup: Coercible,
}

impl After {
    pub fn new(markup: impl Into<Coercible>) -> Self {
        After {
            markup: markup.into(),
        }
    }
}

impl Transform for After {
    fn name(&self) -> &str {
        "after"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        let markup = markup_argument(self.name(), &self.markup)?;
        for node in selection.roots().iter() {
            let original = node.html();
            node.replace_with_html(format!("{original}{markup}"));
        }
        Ok(Coercible::Parsed(selection))
    }
}

/// Replaces every selected node entirely.
pub struct Replace {
    markup: Coercible,
}

impl Replace {
    pub fn new(markup: impl Into<Coercible>) -> Self {
        Replace {
            markup: markup.into(),
        }
    }
}

impl Transform for Replace {
    fn name(&self) -> &str {
        "replace"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        let markup = markup_argument(self.name(), &self.markup)?;
        selection.roots().replace_with_html(markup);
        Ok(Coercible::Parsed(selection))
    }
}

/// Deletes every selected node.
pub struct Remove;

impl Transform for Remove {
    fn name(&self) -> &str {
        "remove"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        selection.roots().remove();
        Ok(Coercible::Parsed(selection))
    }
}
