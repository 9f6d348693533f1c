//! The conversion pipeline: parse → rewrite → generate.
//!
//! One [`Pipeline`] composes a front-end with an ordered rule list and
//! converts one file's text at a time. A run is synchronous, owns its
//! whole tree, and shares nothing mutable, so a single pipeline value
//! can serve many files (or many threads) without coordination.

use tracing::debug;

use crate::codegen::PythonGenerator;
use crate::engine::apply_rules;
use crate::error::ConvertError;
use crate::frontend::Frontend;
use crate::node::Node;
use crate::rules::Rule;

/// A reusable source-to-source conversion: front-end plus active rules.
pub struct Pipeline<F: Frontend> {
    frontend: F,
    rules: Vec<Box<dyn Rule>>,
}

impl<F: Frontend> Pipeline<F> {
    pub fn new(frontend: F, rules: Vec<Box<dyn Rule>>) -> Self {
        Self { frontend, rules }
    }

    /// Convert one file's source text to Python text.
    ///
    /// Deterministic for a given input and rule order. Fatal failures
    /// ([`ParseError`](crate::error::ParseError),
    /// [`RuleError`](crate::error::RuleError)) abort this file only;
    /// callers converting batches isolate them per file.
    pub fn convert(&self, source: &str) -> Result<String, ConvertError> {
        let unit = self.frontend.parse(source)?;
        debug!(top_level = unit.body.len(), "parsed translation unit");

        let tree = apply_rules(Node::TranslationUnit(unit), &self.rules)?;

        let mut generator = PythonGenerator::new();
        Ok(generator.generate(&tree))
    }
}
