use reweave_dom::CoercionError;
use thiserror::Error;

/// Errors raised while applying a transform chain.
#[derive(Error, Debug)]
pub enum TransformError {
    /// The transform itself failed.
    #[error("transform '{action}' failed: {message}")]
    Failed { action: String, message: String },

    /// The transform returned a value the document adapter could not coerce.
    #[error("transform '{action}' returned a non-coercible value: {source}")]
    NonCoercible {
        action: String,
        #[source]
        source: CoercionError,
    },
}

impl TransformError {
    /// Convenience for implementations reporting their own failure.
    pub fn failed(action: impl Into<String>, message: impl std::fmt::Display) -> Self {
        TransformError::Failed {
            action: action.into(),
            message: message.to_string(),
        }
    }
}
