//! The selection → transform → reconciliation pipeline.

use std::path::Path;

use serde_json::Value;

use crate::error::Error;
use crate::request::{self, Rule};
use reweave_dom::{Document, SerializeOptions, select};
use reweave_selector::SelectorCompiler;
use reweave_transform::apply_chain;

/// The templating service: owns a selector compiler (and its cache) and the
/// serialization options for rendered output.
///
/// Construct one explicitly and share it freely: the compiler cache is
/// synchronized and there is no global state. Every call works on its own
/// document, so concurrent calls are independent.
pub struct Transformer {
    compiler: SelectorCompiler,
    options: SerializeOptions,
}

impl Transformer {
    pub fn new() -> Self {
        Self::with_options(SerializeOptions::default())
    }

    pub fn with_options(options: SerializeOptions) -> Self {
        Transformer {
            compiler: SelectorCompiler::new(),
            options,
        }
    }

    /// Transform `document` by evaluating every rule against it and
    /// reconciling the transformed fragments back into one rendered string.
    ///
    /// Selectors are always evaluated against the original document, never
    /// against intermediate transformed state: rules are independent and
    /// their order cannot change what a selector matches. An empty input
    /// short-circuits to itself without any parsing.
    pub fn transform_string(&self, document: &str, rules: &[Rule]) -> Result<String, Error> {
        if document.is_empty() {
            return Ok(document.to_string());
        }
        let doc = Document::parse(document);
        let base = doc.serialize();
        log::debug!(
            "parsed {} bytes into a {:?} document ({} rules)",
            document.len(),
            doc.kind(),
            rules.len()
        );

        // (original serialization, transformed serialization), kept in
        // first-recorded order for the request-order tie-break below.
        let mut pairs: Vec<(String, String)> = Vec::new();
        for rule in rules {
            let matcher = self.compiler.compile(rule.selector())?;
            let (original, selection) = select(&doc, &matcher);
            let transformed = apply_chain(selection, rule.chain())?;
            let replacement = transformed.serialize();
            if original.is_empty() {
                // Nothing matched; a pair keyed on "" would insert the
                // replacement between every character of the base text.
                log::debug!("selector '{}' matched nothing", rule.selector());
                continue;
            }
            match pairs.iter_mut().find(|(existing, _)| *existing == original) {
                // Identical original text: the later rule wins.
                Some(entry) => entry.1 = replacement,
                None => pairs.push((original, replacement)),
            }
        }

        // Longer originals substitute first, so a nested selection cannot
        // corrupt the text an enclosing replacement still needs to match
        // verbatim. The sort is stable: equal lengths keep request order.
        pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let rendered = pairs.iter().fold(base, |text, (original, replacement)| {
            text.replace(original.as_str(), replacement)
        });
        Ok(self.options.doctype.apply(&rendered))
    }

    /// Read `path` and transform its contents; IO errors propagate
    /// unchanged.
    pub fn transform_file(&self, path: impl AsRef<Path>, rules: &[Rule]) -> Result<String, Error> {
        let contents = std::fs::read_to_string(path)?;
        self.transform_string(&contents, rules)
    }

    /// Transform with requests given in the flat JSON calling convention
    /// (see [`request::parse_requests`]).
    ///
    /// An empty document wins over request validation; for anything else
    /// the requests are validated before the document is parsed.
    pub fn transform_json(&self, document: &str, requests: &Value) -> Result<String, Error> {
        if document.is_empty() {
            return Ok(document.to_string());
        }
        let rules = request::parse_requests(requests)?;
        self.transform_string(document, &rules)
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new()
    }
}
