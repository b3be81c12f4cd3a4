//! Canonical HTML document representation for the Reweave pipeline.
//!
//! Selector evaluation, transform actions, and reconciliation all speak in
//! terms of [`Document`] values produced by the [`coerce()`] adapter. HTML
//! parsing, serialization, and selector matching are delegated to
//! `dom_query`.

pub mod coerce;
pub mod document;
pub mod error;
pub mod escape;
pub mod output;

pub use coerce::{Coercible, coerce};
pub use document::{Document, DocumentKind, Selection, matched_markup, select};
pub use error::CoercionError;
pub use escape::escape;
pub use output::{Doctype, SerializeOptions};

// Re-exported so dependents can name matcher and selection types without
// pinning their own copy of the dependency.
pub use dom_query;
