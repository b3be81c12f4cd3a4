//! The transform contract and the action-chain executor.
//!
//! A transform is a capability object rather than an opaque callable: the
//! [`Transform`] trait fixes the contract (consume a selection, return a
//! coercible value) so a chain's shape is enforced by the type system, and
//! [`FnTransform`] adapts closures for one-off transforms.

pub mod chain;
pub mod error;

pub use chain::apply_chain;
pub use error::TransformError;

use reweave_dom::{Coercible, Selection};

/// A single transform step.
///
/// Implementations carry their own argument data. The returned value is
/// anything the document adapter can coerce: markup text, a parsed
/// document, or a list of either.
pub trait Transform {
    /// Name used to identify the failing step when a chain errors.
    fn name(&self) -> &str;

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError>;
}

/// Adapts a closure into a [`Transform`].
pub struct FnTransform<F> {
    name: String,
    func: F,
}

impl<F> FnTransform<F>
where
    F: Fn(Selection) -> Result<Coercible, TransformError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        FnTransform {
            name: name.into(),
            func,
        }
    }
}

impl<F> Transform for FnTransform<F>
where
    F: Fn(Selection) -> Result<Coercible, TransformError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, selection: Selection) -> Result<Coercible, TransformError> {
        (self.func)(selection)
    }
}
