//! Transform requests: typed rules, and the flat JSON calling convention.

use std::sync::Arc;

use itertools::Itertools;
use serde_json::Value;

use crate::actions;
use crate::error::Error;
use reweave_transform::Transform;

/// One (selector, action chain) pair, evaluated against the original
/// document.
pub struct Rule {
    selector: String,
    chain: Vec<Arc<dyn Transform>>,
}

impl Rule {
    pub fn new(selector: impl Into<String>, chain: Vec<Arc<dyn Transform>>) -> Self {
        Rule {
            selector: selector.into(),
            chain,
        }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn chain(&self) -> &[Arc<dyn Transform>] {
        &self.chain
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("selector", &self.selector)
            .field(
                "chain",
                &self.chain.iter().map(|step| step.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Parse the flat calling convention into typed rules:
///
/// ```json
/// ["selector", ["action", arg, "action", arg], "selector", ["action", arg]]
/// ```
///
/// The request array pairs selectors with action lists; each action list
/// pairs action names with their arguments. All validation happens here,
/// before any document is parsed: an odd-length request array, an
/// odd-length action list, an unknown action name, or an ill-typed argument
/// fails with [`Error::MalformedRequest`].
pub fn parse_requests(requests: &Value) -> Result<Vec<Rule>, Error> {
    let items = requests
        .as_array()
        .ok_or_else(|| Error::MalformedRequest(format!("requests must be an array, got {requests}")))?;
    if items.len() % 2 != 0 {
        return Err(Error::MalformedRequest(format!(
            "every selector needs exactly one action list; got {} entries",
            items.len()
        )));
    }
    items
        .iter()
        .tuples()
        .map(|(selector, chain)| {
            let selector = selector.as_str().ok_or_else(|| {
                Error::MalformedRequest(format!("selectors must be strings, got {selector}"))
            })?;
            Ok(Rule::new(selector, parse_chain(selector, chain)?))
        })
        .collect()
}

fn parse_chain(selector: &str, chain: &Value) -> Result<Vec<Arc<dyn Transform>>, Error> {
    let items = chain.as_array().ok_or_else(|| {
        Error::MalformedRequest(format!(
            "the action list for '{selector}' must be an array, got {chain}"
        ))
    })?;
    if items.len() % 2 != 0 {
        return Err(Error::MalformedRequest(format!(
            "every action needs exactly one argument; '{selector}' got {} entries",
            items.len()
        )));
    }
    items
        .iter()
        .tuples()
        .map(|(name, arg)| {
            let name = name.as_str().ok_or_else(|| {
                Error::MalformedRequest(format!("action names must be strings, got {name}"))
            })?;
            actions::by_name(name, arg)
        })
        .collect()
}
