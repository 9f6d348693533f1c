//! Chained-output-call flattening.
//!
//! Recognizes a left-associated `<<` chain rooted at a designated
//! output-stream identifier (`std::cout` by default) and flattens the
//! whole chain into one `print(...)` call: the left spine is walked to
//! its leftmost leaf, each right-hand operand is appended in
//! left-to-right order, and every occurrence of the designated
//! stream-manipulator sentinel (`std::endl` by default) is dropped.
//!
//! Dropping the sentinel leaves a known semantic gap: no flush or
//! extra-newline argument is synthesized for it, and the generated
//! `print` call emits only its own trailing newline. See DESIGN.md.
//!
//! A chain whose leftmost leaf is anything other than the designated
//! stream identifier is left unmatched, even if it uses `<<`.

use crate::error::RuleError;
use crate::node::{CallExpr, Node};
use crate::rules::Rule;

/// `std::cout << a << b << std::endl` → `print(a, b)`.
///
/// The stream, sentinel and target names are fields so the same rule
/// can flatten chains on other streams (e.g. `std::cerr`).
#[derive(Debug)]
pub struct CoutToPrint {
    /// Identifier the chain must be rooted at.
    pub stream: String,
    /// Manipulator operand dropped from the argument list.
    pub manipulator: String,
    /// Name of the print-like function to call.
    pub target: String,
}

impl Default for CoutToPrint {
    fn default() -> Self {
        Self {
            stream: "std::cout".to_string(),
            manipulator: "std::endl".to_string(),
            target: "print".to_string(),
        }
    }
}

impl CoutToPrint {
    fn is_insertion(node: &Node) -> bool {
        matches!(node, Node::BinaryOp(op) if op.op == "<<")
    }

    /// Walk the left spine of a `<<` chain. Returns the flattened
    /// argument list if the spine bottoms out at the designated stream
    /// identifier, `None` otherwise.
    fn flatten(&self, node: &Node) -> Option<Vec<Node>> {
        let Node::BinaryOp(op) = node else {
            return None;
        };
        if op.op != "<<" {
            return None;
        }

        let mut args = if Self::is_insertion(&op.left) {
            self.flatten(&op.left)?
        } else {
            match op.left.as_ref() {
                Node::Identifier(id) if id.name == self.stream => Vec::new(),
                _ => return None,
            }
        };

        match op.right.as_ref() {
            // The sentinel carries no argument; print() supplies the
            // trailing newline.
            Node::Identifier(id) if id.name == self.manipulator => {}
            other => args.push(other.clone()),
        }
        Some(args)
    }
}

impl Rule for CoutToPrint {
    fn name(&self) -> &'static str {
        "cout-to-print"
    }

    fn apply(&self, node: &Node) -> Result<Option<Node>, RuleError> {
        // Only fire at the root of a chain; inner links are consumed
        // by the flattening and must not match on their own.
        let Some(args) = self.flatten(node) else {
            return Ok(None);
        };
        Ok(Some(Node::CallExpr(CallExpr {
            callee: Box::new(Node::ident(self.target.clone())),
            args,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::BinaryOp;

    fn insertion(left: Node, right: Node) -> Node {
        Node::BinaryOp(BinaryOp {
            op: "<<".to_string(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// `std::cout << "a" << x << std::endl`
    fn sample_chain() -> Node {
        insertion(
            insertion(
                insertion(Node::ident("std::cout"), Node::str("a")),
                Node::ident("x"),
            ),
            Node::ident("std::endl"),
        )
    }

    #[test]
    fn chain_flattens_to_print_call() {
        let rewritten = CoutToPrint::default()
            .apply(&sample_chain())
            .unwrap()
            .expect("should match");
        let Node::CallExpr(call) = rewritten else {
            panic!("expected CallExpr, got {}", rewritten.kind_name());
        };
        assert_eq!(*call.callee, Node::ident("print"));
        assert_eq!(call.args, vec![Node::str("a"), Node::ident("x")]);
    }

    #[test]
    fn sentinel_in_the_middle_is_dropped() {
        let chain = insertion(
            insertion(
                insertion(Node::ident("std::cout"), Node::ident("std::endl")),
                Node::str("b"),
            ),
            Node::int(2),
        );
        let rewritten = CoutToPrint::default().apply(&chain).unwrap().unwrap();
        let Node::CallExpr(call) = rewritten else {
            panic!("expected CallExpr");
        };
        assert_eq!(call.args, vec![Node::str("b"), Node::int(2)]);
    }

    #[test]
    fn chain_rooted_elsewhere_does_not_match() {
        let chain = insertion(insertion(Node::ident("logger"), Node::str("a")), Node::ident("x"));
        assert_eq!(CoutToPrint::default().apply(&chain).unwrap(), None);
    }

    #[test]
    fn non_insertion_operator_does_not_match() {
        let shift = Node::BinaryOp(BinaryOp {
            op: ">>".to_string(),
            left: Box::new(Node::ident("std::cout")),
            right: Box::new(Node::ident("x")),
        });
        assert_eq!(CoutToPrint::default().apply(&shift).unwrap(), None);
    }

    #[test]
    fn mixed_operator_spine_does_not_match() {
        // (std::cout + "a") << x: the spine breaks before the stream.
        let chain = insertion(
            Node::BinaryOp(BinaryOp {
                op: "+".to_string(),
                left: Box::new(Node::ident("std::cout")),
                right: Box::new(Node::str("a")),
            }),
            Node::ident("x"),
        );
        assert_eq!(CoutToPrint::default().apply(&chain).unwrap(), None);
    }

    #[test]
    fn configured_stream_and_target_are_honored() {
        let rule = CoutToPrint {
            stream: "std::cerr".to_string(),
            manipulator: "std::endl".to_string(),
            target: "log".to_string(),
        };
        let chain = insertion(Node::ident("std::cerr"), Node::str("oops"));
        let Node::CallExpr(call) = rule.apply(&chain).unwrap().unwrap() else {
            panic!("expected CallExpr");
        };
        assert_eq!(*call.callee, Node::ident("log"));
        assert_eq!(call.args, vec![Node::str("oops")]);
    }

    #[test]
    fn original_chain_is_untouched_on_match() {
        let chain = sample_chain();
        let before = chain.clone();
        let _ = CoutToPrint::default().apply(&chain).unwrap();
        assert_eq!(chain, before);
    }
}
