//! Structural actions: wrapping and unwrapping the selected nodes.

use reweave_dom::{Coercible, Selection};
use reweave_transform::{Transform, TransformError};

/// Wraps every selected node in the given elements, outermost last.
pub struct Wrap {
    tags: Vec<String>,
}

impl Wrap {
    pub fn new(tags: Vec<String>) -> Self {
        Wrap { tags }
    }
}

impl Transform for Wrap {
    fn name(&self) -> &str {
        "wrap"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        for node in selection.roots().iter() {
            let mut markup = node.html().to_string();
            for tag in &self.tags {
                markup = format!("<{tag}>{markup}</{tag}>");
            }
            node.replace_with_html(markup);
        }
        Ok(Coercible::Parsed(selection))
    }
}

/// Removes each selected node's own tag, promoting its children.
pub struct Unwrap;

impl Transform for Unwrap {
    fn name(&self) -> &str {
        "unwrap"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        for node in selection.roots().iter() {
            let inner = node.inner_html().to_string();
            node.replace_with_html(inner);
        }
        Ok(Coercible::Parsed(selection))
    }
}
