//! Rewrite rules: pattern detection and node substitution.
//!
//! A rule inspects one node (plus whatever is reachable through its
//! already-attached children) and either declines or produces a
//! replacement subtree. Rules are pure: they never mutate the node they
//! are offered, never consult siblings or ancestors, and construct
//! replacements from fresh nodes, so a match that fails partway through
//! a multi-step guard leaves the original tree intact by construction.
//!
//! The set of rule names is closed over the implementations compiled
//! into this module; there is no dynamic rule loading. Callers select
//! rules by name through [`rules_by_name`].

mod cout_to_print;
mod for_to_range;

pub use cout_to_print::CoutToPrint;
pub use for_to_range::ForToRange;

use std::fmt;

use crate::error::RuleError;
use crate::node::Node;

/// A unit of transformation over one node.
pub trait Rule: fmt::Debug + Send + Sync {
    /// Registry name, stable across releases.
    fn name(&self) -> &'static str;

    /// Offer `node` to the rule.
    ///
    /// - `Ok(None)`: the node does not match this rule's pattern. This
    ///   is the overwhelmingly common case and costs a handful of
    ///   variant/field checks with early exit.
    /// - `Ok(Some(replacement))`: the pattern matched; `replacement`
    ///   stands in for `node` (possibly with a different kind).
    /// - `Err(_)`: the guard matched but the rewrite could not be
    ///   completed safely; fatal for the current file.
    fn apply(&self, node: &Node) -> Result<Option<Node>, RuleError>;
}

/// All compiled-in rules, in the default application order.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ForToRange),
        Box::new(CoutToPrint::default()),
    ]
}

/// Names of all compiled-in rules, in default order.
pub fn rule_names() -> Vec<&'static str> {
    default_rules().iter().map(|r| r.name()).collect()
}

/// Build a rule list from registry names, preserving caller order.
///
/// Returns the first unknown name as `Err` so misconfigurations fail
/// before any file is processed.
pub fn rules_by_name(names: &[String]) -> Result<Vec<Box<dyn Rule>>, String> {
    names
        .iter()
        .map(|name| match name.as_str() {
            "for-to-range" => Ok(Box::new(ForToRange) as Box<dyn Rule>),
            "cout-to-print" => Ok(Box::new(CoutToPrint::default()) as Box<dyn Rule>),
            unknown => Err(unknown.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_names_match_rule_names() {
        assert_eq!(rule_names(), vec!["for-to-range", "cout-to-print"]);
    }

    #[test]
    fn rules_by_name_preserves_caller_order() {
        let rules =
            rules_by_name(&["cout-to-print".to_string(), "for-to-range".to_string()]).unwrap();
        let names: Vec<_> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["cout-to-print", "for-to-range"]);
    }

    #[test]
    fn unknown_rule_name_is_rejected() {
        let err = rules_by_name(&["while-to-until".to_string()]).unwrap_err();
        assert_eq!(err, "while-to-until");
    }
}
