use thiserror::Error;

/// Errors from translating CSS selector text into a tree query.
#[derive(Error, Debug, Clone)]
pub enum SelectorError {
    #[error("invalid selector '{selector}': {message}")]
    Syntax { selector: String, message: String },
}
