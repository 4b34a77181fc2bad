//! Built-in declaration rules.
//!
//! Rules run in registry order. The order is part of the behaviour: units and
//! `!important` are checked before property categories, and both may fire for
//! the same declaration.
//!
//! # Example
//!
//! ```rust
//! use bidi_lint_core::analysis::linting::{BuiltinRules, DeclarationRule};
//!
//! for rule in BuiltinRules::all_rules() {
//!     println!("{}: {}", rule.id(), rule.description());
//! }
//! ```

use super::DeclarationRule;

pub mod direction;
pub mod units;

pub use direction::DirectionRule;
pub use units::UnitsRule;

/// Registry order
static RULES: [&dyn DeclarationRule; 2] = [&UnitsRule, &DirectionRule];

/// Built-in rules registry
pub struct BuiltinRules;

impl BuiltinRules {
    /// All built-in rules, in the order they are applied
    ///
    /// # Example
    ///
    /// ```rust
    /// use bidi_lint_core::analysis::linting::rules::BuiltinRules;
    ///
    /// assert_eq!(BuiltinRules::all_rules().len(), 2);
    /// ```
    #[must_use]
    pub fn all_rules() -> &'static [&'static dyn DeclarationRule] {
        &RULES
    }

    /// Get rule by ID
    ///
    /// Returns the rule with the specified ID, or None if no such rule exists.
    #[must_use]
    pub fn rule_by_id(id: &str) -> Option<&'static dyn DeclarationRule> {
        Self::all_rules().iter().copied().find(|rule| rule.id() == id)
    }

    /// Get all rule IDs, in application order
    #[must_use]
    pub fn all_rule_ids() -> Vec<&'static str> {
        Self::all_rules().iter().map(|rule| rule.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_apply_units_first() {
        assert_eq!(BuiltinRules::all_rule_ids(), ["units", "ltr-rtl"]);
    }

    #[test]
    fn all_rules_have_unique_ids() {
        let mut ids = Vec::new();

        for rule in BuiltinRules::all_rules() {
            let id = rule.id();
            assert!(!ids.contains(&id), "Duplicate rule ID: {id}");
            ids.push(id);
        }
    }

    #[test]
    fn rule_by_id_works() {
        let rule = BuiltinRules::rule_by_id("ltr-rtl");
        assert!(rule.is_some());
        assert_eq!(rule.unwrap().name(), "LTR/RTL Properties");

        assert!(BuiltinRules::rule_by_id("nonexistent").is_none());
    }
}
