use thiserror::Error;

/// Failure to normalize a value into the canonical document representation.
#[derive(Error, Debug)]
pub enum CoercionError {
    #[error("input bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
