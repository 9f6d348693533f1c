//! Error taxonomy for the translation pipeline.
//!
//! Two conditions are fatal for the file being translated:
//!
//! - [`ParseError`]: the front-end could not produce a tree at all.
//! - [`RuleError`]: a rule's guard accepted a node its rewrite could
//!   not handle. Continuing with a partially applied rule set risks
//!   silently wrong output, so the engine stops instead.
//!
//! Two conditions are deliberate degradations, not errors:
//!
//! - Unhandled constructs arrive from the front-end as `Identifier`
//!   placeholders and render visibly (or are skipped at the top level).
//! - A declared type absent from the type map simply gets no
//!   annotation in the output.
//!
//! Fatal errors are scoped to one file. Batch callers report each
//! file's failure independently and keep going.

use thiserror::Error;

/// The front-end rejected the source text.
///
/// Carries the front-end's diagnostics verbatim; the pipeline adds no
/// interpretation of its own.
#[derive(Debug, Clone, Error)]
#[error("parse failed: {}", diagnostics.join("; "))]
pub struct ParseError {
    pub diagnostics: Vec<String>,
}

impl ParseError {
    /// Convenience constructor for a single-diagnostic failure.
    pub fn new(diagnostic: impl Into<String>) -> Self {
        Self {
            diagnostics: vec![diagnostic.into()],
        }
    }
}

/// A rule matched a node but could not rewrite it safely.
///
/// This is a contract violation between a rule's guard and its body,
/// fatal for the current file.
#[derive(Debug, Clone, Error)]
#[error("rule '{rule}' could not rewrite {kind} node: {message}")]
pub struct RuleError {
    /// Registry name of the failing rule.
    pub rule: &'static str,
    /// Kind of the node the rule was rewriting.
    pub kind: &'static str,
    pub message: String,
}

/// Any fatal failure of one file's parse → rewrite → generate run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Rule(#[from] RuleError),
}
