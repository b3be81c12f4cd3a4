//! Shared helpers for the integration tests.
#![allow(dead_code)]

use reweave::{Error, Transformer};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Transform with a default transformer and the flat JSON request
/// convention.
pub fn transform(document: &str, requests: &Value) -> Result<String, Error> {
    Transformer::new().transform_json(document, requests)
}

/// Read an attribute back from rendered output.
pub fn attr_of(rendered: &str, selector: &str, name: &str) -> Option<String> {
    reweave::Document::parse(rendered)
        .dom()
        .select(selector)
        .attr(name)
        .map(|value| value.to_string())
}
