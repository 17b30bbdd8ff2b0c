//! Validation and error formatting
//!
//! Request shapes declare their rules as constant tables ([`rules`]); the
//! [`validators`] walk those tables and the [`formatter`] turns the resulting
//! violations into client-facing field errors.

pub mod extractor;
pub mod formatter;
pub mod rules;
pub mod validators;

pub use extractor::Validated;
pub use formatter::{ErrorFormatter, MessageTemplates};
pub use rules::{Constrained, Constraint, ConstraintSet, FieldRules, WireName};
pub use validators::{Violation, validate};
