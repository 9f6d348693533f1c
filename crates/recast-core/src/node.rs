//! The internal AST node model.
//!
//! Every tree the pipeline touches is built from the closed set of kinds
//! defined here: the kinds a front-end can produce (spanning one source
//! file down to literals) plus [`RangeLoop`], the bounded-iteration kind
//! synthesized by the counted-loop rule. Keeping the synthesized kind in
//! the same enum means the visitor and the code generator dispatch with
//! an exhaustive `match` instead of a runtime handler table: adding a
//! kind is a compile error until every consumer handles it.
//!
//! Nodes form a strict tree. Every child is owned exclusively by its
//! parent field; there are no shared or back references. Ordered
//! sequences (`TranslationUnit::body`, `FunctionDecl::body`,
//! `ForLoop::body`, call arguments) carry execution/declaration order
//! and must be preserved across rewrites.
//!
//! The whole model derives `Serialize`/`Deserialize`; the externally
//! tagged JSON form is the wire format front-ends hand to
//! [`JsonFrontend`](crate::frontend::JsonFrontend).

use serde::{Deserialize, Serialize};

/// The root of one source file: its top-level declarations in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationUnit {
    pub body: Vec<Node>,
}

/// A function definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    /// Parameters are declarations, never arbitrary nodes.
    pub params: Vec<VarDecl>,
    pub body: Vec<Node>,
    /// Declared return type as spelled in the source (e.g. `"int"`,
    /// `"std::string"`). Translated through the type map at render time.
    pub return_type: String,
}

/// A variable declaration, optionally initialized.
///
/// Doubles as a function parameter (with `init` unused there), which is
/// why it is a standalone struct rather than inline enum fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub name: String,
    /// Declared type as spelled in the source, qualifiers included.
    pub declared_type: String,
    pub init: Option<Box<Node>>,
}

/// A function invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Box<Node>,
    pub args: Vec<Node>,
}

/// A binary expression. The operator is kept as its source spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryOp {
    pub op: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// A unary expression. Prefix and postfix spellings of the same operator
/// are collapsed to one symbol by the front-end (`++i` and `i++` both
/// arrive as `"++"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryOp {
    pub op: String,
    pub operand: Box<Node>,
}

/// A C-style counted loop, as parsed.
///
/// All three clauses are required; a front-end represents an absent
/// clause with an `Identifier` placeholder so the fallback renderer
/// still produces visible output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForLoop {
    pub init: Box<Node>,
    pub cond: Box<Node>,
    pub inc: Box<Node>,
    pub body: Vec<Node>,
}

/// Bounded iteration of a variable from zero up to (excluding) a bound.
///
/// Synthesized by the counted-loop canonicalization rule; never produced
/// by a front-end. Renders as `for <var> in range(<bound>):`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeLoop {
    pub var: String,
    pub bound: Box<Node>,
    pub body: Vec<Node>,
}

/// A name reference.
///
/// Also the degraded form of anything a front-end could not convert:
/// unsupported constructs arrive as an `Identifier` carrying a visible
/// placeholder name, and bare identifiers at the top level are skipped
/// by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

/// A literal constant, tagged with its source type.
///
/// The tag survives rewriting: the generator quotes strings and leaves
/// numbers unquoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
}

/// One node of the internal AST.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    TranslationUnit(TranslationUnit),
    FunctionDecl(FunctionDecl),
    VarDecl(VarDecl),
    CallExpr(CallExpr),
    BinaryOp(BinaryOp),
    UnaryOp(UnaryOp),
    ForLoop(ForLoop),
    RangeLoop(RangeLoop),
    Identifier(Identifier),
    Literal(Literal),
}

impl Node {
    /// Stable kind name for diagnostics and placeholder rendering.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::TranslationUnit(_) => "TranslationUnit",
            Node::FunctionDecl(_) => "FunctionDecl",
            Node::VarDecl(_) => "VarDecl",
            Node::CallExpr(_) => "CallExpr",
            Node::BinaryOp(_) => "BinaryOp",
            Node::UnaryOp(_) => "UnaryOp",
            Node::ForLoop(_) => "ForLoop",
            Node::RangeLoop(_) => "RangeLoop",
            Node::Identifier(_) => "Identifier",
            Node::Literal(_) => "Literal",
        }
    }

    /// Shorthand for an identifier node.
    pub fn ident(name: impl Into<String>) -> Node {
        Node::Identifier(Identifier { name: name.into() })
    }

    /// Shorthand for an integer literal node.
    pub fn int(value: i64) -> Node {
        Node::Literal(Literal::Int(value))
    }

    /// Shorthand for a string literal node.
    pub fn str(value: impl Into<String>) -> Node {
        Node::Literal(Literal::Str(value.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(Node::ident("x").kind_name(), "Identifier");
        assert_eq!(Node::int(3).kind_name(), "Literal");
        assert_eq!(
            Node::TranslationUnit(TranslationUnit { body: vec![] }).kind_name(),
            "TranslationUnit"
        );
    }

    #[test]
    fn json_round_trip_preserves_literal_tags() {
        let node = Node::CallExpr(CallExpr {
            callee: Box::new(Node::ident("print")),
            args: vec![Node::int(1), Node::Literal(Literal::Float(1.0)), Node::str("1")],
        });
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn externally_tagged_wire_format() {
        let json = r#"{"Identifier":{"name":"x"}}"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node, Node::ident("x"));
    }
}
