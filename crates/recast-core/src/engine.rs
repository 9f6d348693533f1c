//! The rule engine: ordered rule application over a whole tree.
//!
//! Traversal is pre-order with rewrite-before-descend semantics. At
//! each node, every rule is offered the node in list order (rule *k*'s
//! output feeds rule *k+1*); only then does the engine descend into the
//! possibly-replaced node's children through the generic traversal.
//! A synthesized replacement is therefore still traversed, and its
//! children remain reachable by the rules.
//!
//! Rule order is observable whenever two rules match overlapping node
//! kinds, so callers pass an explicitly ordered list.

use tracing::debug;

use crate::error::RuleError;
use crate::node::Node;
use crate::rules::Rule;
use crate::visitor::{walk, Transformer};

/// Apply `rules` to every node of `tree`, pre-order.
///
/// The first rule failure aborts the run: the remaining tree passes
/// through unrewritten and the error is returned. Partial application
/// never leaks into a successful result.
pub fn apply_rules(tree: Node, rules: &[Box<dyn Rule>]) -> Result<Node, RuleError> {
    let mut engine = RuleEngine { rules, error: None };
    let tree = engine.transform(tree);
    match engine.error {
        Some(err) => Err(err),
        None => Ok(tree),
    }
}

/// Transformer that folds each visited node through the rule list.
///
/// The traversal contract is infallible, so a rule failure poisons the
/// engine instead: once `error` is set, nodes pass through untouched
/// and [`apply_rules`] surfaces the recorded error.
struct RuleEngine<'r> {
    rules: &'r [Box<dyn Rule>],
    error: Option<RuleError>,
}

impl Transformer for RuleEngine<'_> {
    fn transform(&mut self, mut node: Node) -> Node {
        if self.error.is_some() {
            return node;
        }
        for rule in self.rules {
            match rule.apply(&node) {
                Ok(Some(replacement)) => {
                    debug!(
                        rule = rule.name(),
                        from = node.kind_name(),
                        to = replacement.kind_name(),
                        "rewrote node"
                    );
                    node = replacement;
                }
                Ok(None) => {}
                Err(err) => {
                    self.error = Some(err);
                    return node;
                }
            }
        }
        walk(self, node)
    }
}
