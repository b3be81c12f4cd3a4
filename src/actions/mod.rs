//! The built-in transform action catalogue.
//!
//! Every action conforms to the [`Transform`] contract: it consumes a
//! selection, works on the top-level elements of its fragment, and returns a
//! coercible value for the chain executor to re-materialize. All actions
//! tolerate an empty selection.

mod attrs;
mod content;
mod select;
mod siblings;
mod structure;

pub use attrs::{AppendAttrs, RemoveAttrs, RemoveFromAttrs, SetAttrs};
pub use content::{Append, AppendHtml, Content, HtmlContent, Prepend, PrependHtml};
pub use select::CssSelect;
pub use siblings::{After, Before, Remove, Replace};
pub use structure::{Unwrap, Wrap};

pub use crate::sanitize::Sanitize;

use std::sync::Arc;

use serde_json::Value;

use crate::error::Error;
use reweave_dom::Coercible;
use reweave_transform::{Transform, TransformError};

/// Resolve a named action and its JSON argument into a transform, for the
/// flat request front-end.
pub fn by_name(name: &str, arg: &Value) -> Result<Arc<dyn Transform>, Error> {
    let action: Arc<dyn Transform> = match name {
        "setAttrs" => Arc::new(SetAttrs::new(attr_pairs(name, arg)?)),
        "removeAttrs" => Arc::new(RemoveAttrs::new(string_list(name, arg)?)),
        "appendAttrs" => Arc::new(AppendAttrs::new(string_pairs(name, arg)?)),
        "removeFromAttrs" => Arc::new(RemoveFromAttrs::new(string_pairs(name, arg)?)),
        "content" => Arc::new(Content::new(string_arg(name, arg)?)),
        "htmlContent" => Arc::new(HtmlContent::new(string_arg(name, arg)?)),
        "append" => Arc::new(Append::new(string_arg(name, arg)?)),
        "prepend" => Arc::new(Prepend::new(string_arg(name, arg)?)),
        "appendHtml" => Arc::new(AppendHtml::new(string_arg(name, arg)?)),
        "prependHtml" => Arc::new(PrependHtml::new(string_arg(name, arg)?)),
        "before" => Arc::new(Before::new(string_arg(name, arg)?)),
        "after" => Arc::new(After::new(string_arg(name, arg)?)),
        "replace" => Arc::new(Replace::new(string_arg(name, arg)?)),
        "remove" => Arc::new(Remove),
        "wrap" => Arc::new(Wrap::new(string_list(name, arg)?)),
        "unwrap" => Arc::new(Unwrap),
        "cssSelect" => Arc::new(CssSelect::new(string_arg(name, arg)?)),
        "sanitize" => Arc::new(Sanitize::new()),
        other => {
            return Err(Error::MalformedRequest(format!("unknown action '{other}'")));
        }
    };
    Ok(action)
}

/// Normalize a markup-valued action argument through the document adapter.
pub(crate) fn markup_argument(action: &str, value: &Coercible) -> Result<String, TransformError> {
    value
        .to_markup()
        .map_err(|e| TransformError::failed(action, format!("argument is not coercible: {e}")))
}

fn string_arg(name: &str, arg: &Value) -> Result<String, Error> {
    arg.as_str().map(str::to_string).ok_or_else(|| {
        Error::MalformedRequest(format!(
            "action '{name}' expects a string argument, got {arg}"
        ))
    })
}

/// A single string, or a list of strings.
fn string_list(name: &str, arg: &Value) -> Result<Vec<String>, Error> {
    match arg {
        Value::String(text) => Ok(vec![text.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    Error::MalformedRequest(format!(
                        "action '{name}' expects strings in its list, got {item}"
                    ))
                })
            })
            .collect(),
        other => Err(Error::MalformedRequest(format!(
            "action '{name}' expects a string or list of strings, got {other}"
        ))),
    }
}

/// An object mapping attribute names to string values.
fn string_pairs(name: &str, arg: &Value) -> Result<Vec<(String, String)>, Error> {
    let map = arg.as_object().ok_or_else(|| {
        Error::MalformedRequest(format!("action '{name}' expects an object argument, got {arg}"))
    })?;
    map.iter()
        .map(|(key, value)| {
            value.as_str().map(|v| (key.clone(), v.to_string())).ok_or_else(|| {
                Error::MalformedRequest(format!(
                    "action '{name}' expects string values, got {value} for '{key}'"
                ))
            })
        })
        .collect()
}

/// An object mapping attribute names to string-or-null values; a null value
/// removes the attribute.
fn attr_pairs(name: &str, arg: &Value) -> Result<Vec<(String, Option<String>)>, Error> {
    let map = arg.as_object().ok_or_else(|| {
        Error::MalformedRequest(format!("action '{name}' expects an object argument, got {arg}"))
    })?;
    map.iter()
        .map(|(key, value)| match value {
            Value::Null => Ok((key.clone(), None)),
            Value::String(text) => Ok((key.clone(), Some(text.clone()))),
            other => Err(Error::MalformedRequest(format!(
                "action '{name}' expects string or null values, got {other} for '{key}'"
            ))),
        })
        .collect()
}
