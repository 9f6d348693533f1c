//! Rebuilding traversal over the AST.
//!
//! A [`Transformer`] consumes a node by value and returns its
//! replacement. The default implementation delegates to [`walk`], which
//! rebuilds every child field through the transformer: elements of
//! ordered sequences are replaced one by one, boxed children are
//! replaced in their slot, and scalar fields pass through untouched.
//! A transformer that overrides nothing is therefore the identity, and
//! one that rewrites a node can rely on `walk` to carry the traversal
//! into the replacement's children.
//!
//! Visiting rebuilds rather than mutating in place: a transformer only
//! ever observes fully pre-rewrite children of the node it holds, and
//! the input tree is consumed, so there is no shared structure to
//! observe in a half-rewritten state.

use crate::node::{
    BinaryOp, CallExpr, ForLoop, FunctionDecl, Node, RangeLoop, TranslationUnit, UnaryOp, VarDecl,
};

/// A tree-to-tree transformation.
pub trait Transformer {
    /// Transform one node. The default recurses into children via
    /// [`walk`] and otherwise leaves the node unchanged.
    fn transform(&mut self, node: Node) -> Node {
        walk(self, node)
    }
}

/// The identity transformer; useful as a traversal-completeness
/// baseline and in tests.
#[derive(Debug, Default)]
pub struct Identity;

impl Transformer for Identity {}

/// Generic traversal: rebuild every child of `node` through `t`.
///
/// Exhaustive over the node kinds, so a newly added kind fails to
/// compile here until its children are threaded through the traversal.
pub fn walk<T: Transformer + ?Sized>(t: &mut T, node: Node) -> Node {
    match node {
        Node::TranslationUnit(unit) => Node::TranslationUnit(TranslationUnit {
            body: walk_seq(t, unit.body),
        }),
        Node::FunctionDecl(func) => Node::FunctionDecl(FunctionDecl {
            name: func.name,
            params: func.params.into_iter().map(|p| walk_var_decl(t, p)).collect(),
            body: walk_seq(t, func.body),
            return_type: func.return_type,
        }),
        Node::VarDecl(decl) => Node::VarDecl(walk_var_decl(t, decl)),
        Node::CallExpr(call) => Node::CallExpr(CallExpr {
            callee: walk_boxed(t, call.callee),
            args: walk_seq(t, call.args),
        }),
        Node::BinaryOp(op) => Node::BinaryOp(BinaryOp {
            op: op.op,
            left: walk_boxed(t, op.left),
            right: walk_boxed(t, op.right),
        }),
        Node::UnaryOp(op) => Node::UnaryOp(UnaryOp {
            op: op.op,
            operand: walk_boxed(t, op.operand),
        }),
        Node::ForLoop(loop_) => Node::ForLoop(ForLoop {
            init: walk_boxed(t, loop_.init),
            cond: walk_boxed(t, loop_.cond),
            inc: walk_boxed(t, loop_.inc),
            body: walk_seq(t, loop_.body),
        }),
        Node::RangeLoop(loop_) => Node::RangeLoop(RangeLoop {
            var: loop_.var,
            bound: walk_boxed(t, loop_.bound),
            body: walk_seq(t, loop_.body),
        }),
        // Leaves: no children to rebuild.
        Node::Identifier(_) | Node::Literal(_) => node,
    }
}

fn walk_seq<T: Transformer + ?Sized>(t: &mut T, nodes: Vec<Node>) -> Vec<Node> {
    nodes.into_iter().map(|n| t.transform(n)).collect()
}

fn walk_boxed<T: Transformer + ?Sized>(t: &mut T, node: Box<Node>) -> Box<Node> {
    Box::new(t.transform(*node))
}

/// Parameters and declarations stay `VarDecl`-shaped; only the
/// initializer expression is open to rewriting.
fn walk_var_decl<T: Transformer + ?Sized>(t: &mut T, decl: VarDecl) -> VarDecl {
    VarDecl {
        name: decl.name,
        declared_type: decl.declared_type,
        init: decl.init.map(|init| walk_boxed(t, init)),
    }
}
