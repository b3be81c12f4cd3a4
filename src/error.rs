use reweave_dom::CoercionError;
use reweave_selector::SelectorError;
use reweave_transform::TransformError;
use thiserror::Error;

/// Errors surfaced by the top-level transform entry points.
///
/// Every error is fatal to the enclosing call: there are no partial
/// results, no retries, and no silent-degradation path.
#[derive(Error, Debug)]
pub enum Error {
    /// The request list or an action chain is not a well-formed pair
    /// sequence. Detected before any parsing or transform work.
    #[error("malformed transform request: {0}")]
    MalformedRequest(String),

    #[error("selector error: {0}")]
    Selector(#[from] SelectorError),

    #[error("coercion error: {0}")]
    Coercion(#[from] CoercionError),

    #[error("transform error: {0}")]
    Transform(#[from] TransformError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
