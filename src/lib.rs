//! Reweave: CSS-selector-driven HTML templating.
//!
//! Markup stays logic-less; transformation is programmatic. A document is
//! paired with rules (a CSS selector plus an ordered chain of transform
//! actions), and each selected subtree is rewritten independently, then
//! reconciled back into the source text by deterministic substring
//! substitution (longest original first, request order on ties).
//!
//! # Example
//!
//! ```
//! use reweave::Transformer;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), reweave::Error> {
//! let transformer = Transformer::new();
//! let requests = json!([
//!     "#tutor-details", ["setAttrs", {"id": "new-id"}],
//!     "p", ["content", "Welcome back"],
//! ]);
//! let html = transformer.transform_json(
//!     r#"<div id="tutor-details"><p>Hello</p></div>"#,
//!     &requests,
//! )?;
//! assert_eq!(
//!     html,
//!     r#"<!DOCTYPE html><div id="new-id"><p>Welcome back</p></div>"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Typed rules skip the JSON layer: build [`Rule`] values from the
//! [`actions`] catalogue, or implement [`Transform`] (or wrap a closure in
//! [`FnTransform`]) for custom steps.

pub mod actions;
pub mod error;
pub mod pipeline;
pub mod request;
pub mod sanitize;

pub use error::Error;
pub use pipeline::Transformer;
pub use request::{Rule, parse_requests};
pub use sanitize::{Sanitize, Sanitizer};

pub use reweave_dom::{
    Coercible, CoercionError, Doctype, Document, DocumentKind, Selection, SerializeOptions,
    coerce, select,
};
pub use reweave_selector::{SelectorCompiler, SelectorError};
pub use reweave_transform::{FnTransform, Transform, TransformError, apply_chain};
