//! Content actions: replacing or extending an element's children.

use reweave_dom::{Coercible, Selection, escape};
use reweave_transform::{Transform, TransformError};

use super::markup_argument;

/// Replaces the children of every selected element with the given text.
pub struct Content {
    text: String,
}

impl Content {
    pub fn new(text: impl Into<String>) -> Self {
        Content { text: text.into() }
    }
}

impl Transform for Content {
    fn name(&self) -> &str {
        "content"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        selection.roots().set_html(escape(&self.text).into_owned());
        Ok(Coercible::Parsed(selection))
    }
}

/// Replaces the children of every selected element with parsed markup.
pub struct HtmlContent {
    markup: Coercible,
}

impl HtmlContent {
    pub fn new(markup: impl Into<Coercible>) -> Self {
        HtmlContent {
            markup: markup.into(),
        }
    }
}

impl Transform for HtmlContent {
    fn name(&self) -> &str {
        "htmlContent"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        let markup = markup_argument(self.name(), &self.markup)?;
        selection.roots().set_html(markup);
        Ok(Coercible::Parsed(selection))
    }
}

/// Inserts text at the end of every selected element's children.
pub struct Append {
    text: String,
}

impl Append {
    pub fn new(text: impl Into<String>) -> Self {
        Append { text: text.into() }
    }
}

impl Transform for Append {
    fn name(&self) -> &str {
        "append"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        selection.roots().append_html(escape(&self.text).into_owned());
        Ok(Coercible::Parsed(selection))
    }
}

/// Inserts text at the start of every selected element's children.
pub struct Prepend {
    text: String,
}

impl Prepend {
    pub fn new(text: impl Into<String>) -> Self {
        Prepend { text: text.into() }
    }
}

impl Transform for Prepend {
    fn name(&self) -> &str {
        "prepend"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        selection.roots().prepend_html(escape(&self.text).into_owned());
        Ok(Coercible::Parsed(selection))
    }
}

/// Inserts markup at the end of every selected element's children.
pub struct AppendHtml {
    markup: Coercible,
}

impl AppendHtml {
    pub fn new(markup: impl Into<Coercible>) -> Self {
        AppendHtml {
            markup: markup.into(),
        }
    }
}

impl Transform for AppendHtml {
    fn name(&self) -> &str {
        "appendHtml"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        let markup = markup_argument(self.name(), &self.markup)?;
        selection.roots().append_html(markup);
        Ok(Coercible::Parsed(selection))
    }
}

/// Inserts markup at the start of every selected element's children.
pub struct PrependHtml {
    markup: Coercible,
}

impl PrependHtml {
    pub fn new(markup: impl Into<Coercible>) -> Self {
        PrependHtml {
            markup: markup.into(),
        }
    }
}

impl Transform for PrependHtml {
    fn name(&self) -> &str {
        "prependHtml"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        let markup = markup_argument(self.name(), &self.markup)?;
        selection.roots().prepend_html(markup);
        Ok(Coercible::Parsed(selection))
    }
}
