//! The parser collaborator contract.
//!
//! Turning raw source text into a [`TranslationUnit`] is not this
//! crate's job: a front-end (for C++, typically a libclang binding)
//! owns grammar coverage and hands the pipeline a tree built from the
//! node kinds in [`crate::node`]. Constructs a front-end cannot convert
//! must arrive as `Identifier` placeholders, never as a failure, so one
//! unsupported statement degrades to visibly-unhandled output instead
//! of aborting the file.
//!
//! [`JsonFrontend`] is the concrete front-end shipped here: it reads
//! the externally tagged JSON serialization of [`Node`], which is the
//! wire format an out-of-process parser emits.

use crate::error::ParseError;
use crate::node::{Node, TranslationUnit};

/// Converts raw source text into an internal AST.
pub trait Frontend {
    /// Parse one file's text. Fails only on unrecoverable syntax
    /// errors; unsupported-but-parseable constructs degrade to
    /// placeholders inside the returned tree.
    fn parse(&self, source: &str) -> Result<TranslationUnit, ParseError>;
}

/// Front-end for the externally tagged `Node` JSON format.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFrontend;

impl Frontend for JsonFrontend {
    fn parse(&self, source: &str) -> Result<TranslationUnit, ParseError> {
        let node: Node =
            serde_json::from_str(source).map_err(|err| ParseError::new(err.to_string()))?;
        match node {
            Node::TranslationUnit(unit) => Ok(unit),
            other => Err(ParseError::new(format!(
                "document root must be a TranslationUnit, found {}",
                other.kind_name()
            ))),
        }
    }
}
