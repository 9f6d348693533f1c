//! Counted-loop canonicalization.
//!
//! Recognizes the C idiom `for (T i = 0; i < N; ++i)` (prefix and
//! postfix increment both arrive as `"++"`) and replaces it with a
//! [`RangeLoop`] carrying the loop variable, the upper bound and the
//! original body. The init/cond/inc clauses are redundant once the
//! bound is captured and are discarded. Any loop not matching this
//! exact shape is left alone and renders through the generator's
//! `while` fallback.

use crate::error::RuleError;
use crate::node::{Literal, Node, RangeLoop};
use crate::rules::Rule;

/// `for (T i = 0; i < N; ++i) { .. }` → `RangeLoop { i, N, .. }`.
#[derive(Debug, Default)]
pub struct ForToRange;

impl Rule for ForToRange {
    fn name(&self) -> &'static str {
        "for-to-range"
    }

    fn apply(&self, node: &Node) -> Result<Option<Node>, RuleError> {
        let Node::ForLoop(loop_) = node else {
            return Ok(None);
        };

        // Init must declare the loop variable starting at literal zero.
        let Node::VarDecl(init) = loop_.init.as_ref() else {
            return Ok(None);
        };
        match init.init.as_deref() {
            Some(Node::Literal(Literal::Int(0))) => {}
            _ => return Ok(None),
        }
        let loop_var = init.name.as_str();

        // Condition must be `<loop_var> < <bound>`.
        let Node::BinaryOp(cond) = loop_.cond.as_ref() else {
            return Ok(None);
        };
        if cond.op != "<" {
            return Ok(None);
        }
        let Node::Identifier(cond_var) = cond.left.as_ref() else {
            return Ok(None);
        };
        if cond_var.name != loop_var {
            return Ok(None);
        }

        // Increment must be `++` applied to the loop variable.
        let Node::UnaryOp(inc) = loop_.inc.as_ref() else {
            return Ok(None);
        };
        if inc.op != "++" {
            return Ok(None);
        }
        let Node::Identifier(inc_var) = inc.operand.as_ref() else {
            return Ok(None);
        };
        if inc_var.name != loop_var {
            return Ok(None);
        }

        Ok(Some(Node::RangeLoop(RangeLoop {
            var: loop_var.to_string(),
            bound: cond.right.clone(),
            body: loop_.body.clone(),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{BinaryOp, ForLoop, UnaryOp, VarDecl};

    fn counted_loop(start: i64, op: &str, inc_op: &str, inc_var: &str) -> Node {
        Node::ForLoop(ForLoop {
            init: Box::new(Node::VarDecl(VarDecl {
                name: "i".to_string(),
                declared_type: "int".to_string(),
                init: Some(Box::new(Node::int(start))),
            })),
            cond: Box::new(Node::BinaryOp(BinaryOp {
                op: op.to_string(),
                left: Box::new(Node::ident("i")),
                right: Box::new(Node::ident("N")),
            })),
            inc: Box::new(Node::UnaryOp(UnaryOp {
                op: inc_op.to_string(),
                operand: Box::new(Node::ident(inc_var)),
            })),
            body: vec![Node::CallExpr(crate::node::CallExpr {
                callee: Box::new(Node::ident("work")),
                args: vec![Node::ident("i")],
            })],
        })
    }

    #[test]
    fn canonical_loop_becomes_range_loop() {
        let loop_ = counted_loop(0, "<", "++", "i");
        let rewritten = ForToRange.apply(&loop_).unwrap().expect("should match");
        let Node::RangeLoop(range) = rewritten else {
            panic!("expected RangeLoop, got {}", rewritten.kind_name());
        };
        assert_eq!(range.var, "i");
        assert_eq!(*range.bound, Node::ident("N"));
        assert_eq!(range.body.len(), 1);
    }

    #[test]
    fn nonzero_start_does_not_match() {
        let loop_ = counted_loop(1, "<", "++", "i");
        assert_eq!(ForToRange.apply(&loop_).unwrap(), None);
    }

    #[test]
    fn wrong_comparison_does_not_match() {
        let loop_ = counted_loop(0, "<=", "++", "i");
        assert_eq!(ForToRange.apply(&loop_).unwrap(), None);
    }

    #[test]
    fn decrement_does_not_match() {
        let loop_ = counted_loop(0, "<", "--", "i");
        assert_eq!(ForToRange.apply(&loop_).unwrap(), None);
    }

    #[test]
    fn mismatched_increment_variable_does_not_match() {
        let loop_ = counted_loop(0, "<", "++", "j");
        assert_eq!(ForToRange.apply(&loop_).unwrap(), None);
    }

    #[test]
    fn non_loop_nodes_do_not_match() {
        assert_eq!(ForToRange.apply(&Node::ident("i")).unwrap(), None);
        assert_eq!(ForToRange.apply(&Node::int(0)).unwrap(), None);
    }

    #[test]
    fn original_node_is_untouched_on_match() {
        let loop_ = counted_loop(0, "<", "++", "i");
        let before = loop_.clone();
        let _ = ForToRange.apply(&loop_).unwrap();
        assert_eq!(loop_, before);
    }
}
