//! Attribute actions.

use reweave_dom::{Coercible, Selection};
use reweave_transform::{Transform, TransformError};

/// Sets attributes on every selected element; a `None` value removes the
/// attribute instead.
pub struct SetAttrs {
    attrs: Vec<(String, Option<String>)>,
}

impl SetAttrs {
    pub fn new(attrs: Vec<(String, Option<String>)>) -> Self {
        SetAttrs { attrs }
    }
}

impl Transform for SetAttrs {
    fn name(&self) -> &str {
        "setAttrs"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        let roots = selection.roots();
        for (name, value) in &self.attrs {
            match value {
                Some(value) => roots.set_attr(name, value),
                None => roots.remove_attr(name),
            }
        }
        Ok(Coercible::Parsed(selection))
    }
}

/// Removes the named attributes from every selected element. Delegates to
/// [`SetAttrs`] with unset values.
pub struct RemoveAttrs {
    names: Vec<String>,
}

impl RemoveAttrs {
    pub fn new(names: Vec<String>) -> Self {
        RemoveAttrs { names }
    }
}

impl Transform for RemoveAttrs {
    fn name(&self) -> &str {
        "removeAttrs"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        let unset = self.names.iter().map(|name| (name.clone(), None)).collect();
        SetAttrs::new(unset).apply(selection)
    }
}

/// Appends a space-separated suffix to an attribute on every selected
/// element; a missing attribute is created with the suffix alone.
pub struct AppendAttrs {
    attrs: Vec<(String, String)>,
}

impl AppendAttrs {
    pub fn new(attrs: Vec<(String, String)>) -> Self {
        AppendAttrs { attrs }
    }
}

impl Transform for AppendAttrs {
    fn name(&self) -> &str {
        "appendAttrs"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        for node in selection.roots().iter() {
            for (name, suffix) in &self.attrs {
                let value = match node.attr(name) {
                    Some(existing) if !existing.is_empty() => {
                        format!("{existing} {suffix}")
                    }
                    _ => suffix.clone(),
                };
                node.set_attr(name, &value);
            }
        }
        Ok(Coercible::Parsed(selection))
    }
}

/// Removes whitespace-separated tokens from an attribute on every selected
/// element; elements without the attribute are untouched.
pub struct RemoveFromAttrs {
    attrs: Vec<(String, String)>,
}

impl RemoveFromAttrs {
    pub fn new(attrs: Vec<(String, String)>) -> Self {
        RemoveFromAttrs { attrs }
    }
}

impl Transform for RemoveFromAttrs {
    fn name(&self) -> &str {
        "removeFromAttrs"
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        for node in selection.roots().iter() {
            for (name, tokens) in &self.attrs {
                let Some(existing) = node.attr(name) else {
                    continue;
                };
                let unwanted: Vec<&str> = tokens.split_whitespace().collect();
                let kept: Vec<&str> = existing
                    .split_whitespace()
                    .filter(|token| !unwanted.contains(token))
                    .collect();
                node.set_attr(name, &kept.join(" "));
            }
        }
        Ok(Coercible::Parsed(selection))
    }
}
