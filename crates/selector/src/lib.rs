//! CSS selector compilation with a per-instance cache.
//!
//! Compiling a selector is a pure function of its text, so compiled queries
//! are cached and shared: a transform request compiles each selector at most
//! once, and one compiler instance can serve every rule in a call, or be
//! shared across threads, since the cache is synchronized.

pub mod error;

pub use error::SelectorError;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dom_query::Matcher;

/// Compiles CSS selector strings into reusable tree queries.
pub struct SelectorCompiler {
    cache: Mutex<HashMap<String, Arc<Matcher>>>,
}

impl SelectorCompiler {
    pub fn new() -> Self {
        SelectorCompiler {
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Compile `css`, reusing a previously compiled query when available.
    ///
    /// Malformed selector syntax surfaces as [`SelectorError::Syntax`] with
    /// the offending selector text.
    pub fn compile(&self, css: &str) -> Result<Arc<Matcher>, SelectorError> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(matcher) = cache.get(css) {
            return Ok(Arc::clone(matcher));
        }
        let matcher = Matcher::new(css).map_err(|e| SelectorError::Syntax {
            selector: css.to_string(),
            message: format!("{e:?}"),
        })?;
        let matcher = Arc::new(matcher);
        cache.insert(css.to_string(), Arc::clone(&matcher));
        Ok(matcher)
    }
}

impl Default for SelectorCompiler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_common_selector_forms() {
        let compiler = SelectorCompiler::new();
        for css in [
            "div",
            ".name",
            "#id",
            "[data-id=\"1\"]",
            "div.a > p",
            ".student .name",
            "ul li + li",
            "p, span",
        ] {
            assert!(compiler.compile(css).is_ok(), "selector should compile: {css}");
        }
    }

    #[test]
    fn caches_compiled_selectors() {
        let compiler = SelectorCompiler::new();
        let first = compiler.compile(".a").unwrap();
        let second = compiler.compile(".a").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn syntax_errors_carry_the_selector_text() {
        let compiler = SelectorCompiler::new();
        let err = compiler.compile("p[").unwrap_err();
        let SelectorError::Syntax { selector, .. } = err;
        assert_eq!(selector, "p[");
    }
}
