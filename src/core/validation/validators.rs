//! Constraint evaluation
//!
//! Walks a payload's constraint table in declaration order and reports at most
//! one violation per field: the first rule that fails.

use super::rules::{Constrained, Constraint, ConstraintSet, FieldRules};

/// A failed rule on one field
#[derive(Debug, Clone, Copy)]
pub struct Violation {
    pub field: &'static FieldRules,
    pub constraint: Constraint,
}

impl Violation {
    pub fn tag(&self) -> &'static str {
        self.constraint.tag()
    }

    pub fn param(&self) -> String {
        self.constraint.param()
    }
}

/// Validate a payload against its own constraint table
pub fn validate<T: Constrained>(payload: &T) -> Vec<Violation> {
    validate_with(payload, T::constraint_set())
}

/// Validate a payload against an explicit constraint table
pub fn validate_with<T: Constrained>(payload: &T, set: &'static ConstraintSet) -> Vec<Violation> {
    set.fields
        .iter()
        .filter_map(|rules| check_field(rules, payload.field_value(rules.field).unwrap_or("")))
        .collect()
}

/// First failing rule for a single field value, if any
pub fn check_field(rules: &'static FieldRules, value: &str) -> Option<Violation> {
    if rules.omit_empty && value.is_empty() {
        return None;
    }

    rules
        .constraints
        .iter()
        .find(|constraint| !constraint.is_satisfied_by(value))
        .map(|constraint| Violation {
            field: rules,
            constraint: *constraint,
        })
}
