//! Core pipeline for recast, a rule-driven source-to-source translator.
//!
//! The crate turns a simplified imperative-language AST into formatted
//! Python in three stages:
//!
//! 1. A [`Frontend`](frontend::Frontend) produces the internal tree
//!    (the C/C++ parser itself is an external collaborator; see
//!    [`frontend`]).
//! 2. The [rule engine](engine::apply_rules) applies an ordered list of
//!    pattern-matching [rules](rules::Rule) pre-order, rewriting
//!    recognized idioms into more direct target-language forms.
//! 3. The [code generator](codegen::PythonGenerator) renders the
//!    rewritten tree deterministically.
//!
//! [`Pipeline`](pipeline::Pipeline) composes the three into a single
//! `convert(source) -> python` operation.
//!
//! ```
//! use recast_core::frontend::JsonFrontend;
//! use recast_core::pipeline::Pipeline;
//! use recast_core::rules::default_rules;
//!
//! let pipeline = Pipeline::new(JsonFrontend, default_rules());
//! let python = pipeline
//!     .convert(r#"{"TranslationUnit":{"body":[]}}"#)
//!     .unwrap();
//! assert_eq!(python, "");
//! ```

pub mod codegen;
pub mod engine;
pub mod error;
pub mod frontend;
pub mod node;
pub mod pipeline;
pub mod rules;
pub mod visitor;

pub use codegen::{map_type, PythonGenerator};
pub use engine::apply_rules;
pub use error::{ConvertError, ParseError, RuleError};
pub use frontend::{Frontend, JsonFrontend};
pub use node::{Literal, Node, TranslationUnit};
pub use pipeline::Pipeline;
pub use rules::{default_rules, rule_names, rules_by_name, Rule};
