//! Human-readable validation messages
//!
//! Turns [`Violation`]s into [`FieldError`]s. Messages come from a
//! [`MessageTemplates`] table; the default table is Indonesian and must stay
//! byte-for-byte stable because clients match on it.

use super::rules::{Constrained, Constraint};
use super::validators::{Violation, validate};
use crate::core::error::FieldError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Message table, one template per rule kind
///
/// Placeholders: `{field}`, `{param}` and, for the fallback, `{tag}`.
/// Templates left out of a config file keep their Indonesian default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplates {
    pub required: String,
    pub min: String,
    pub max: String,
    pub one_of: String,
    pub fallback: String,
}

impl MessageTemplates {
    pub fn indonesian() -> Self {
        Self {
            required: "{field} wajib diisi".to_string(),
            min: "{field} minimal {param} karakter".to_string(),
            max: "{field} maksimal {param} karakter".to_string(),
            one_of: "{field} harus salah satu dari: {param}".to_string(),
            fallback: "{field} tidak valid ({tag})".to_string(),
        }
    }
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self::indonesian()
    }
}

/// Formats violations into wire-facing field errors
#[derive(Debug, Clone, Default)]
pub struct ErrorFormatter {
    templates: Arc<MessageTemplates>,
}

impl ErrorFormatter {
    pub fn new(templates: MessageTemplates) -> Self {
        Self {
            templates: Arc::new(templates),
        }
    }

    pub fn templates(&self) -> &MessageTemplates {
        &self.templates
    }

    /// Build the structured error for one violation
    pub fn format(&self, violation: &Violation) -> FieldError {
        let field = violation.field.display_name();
        let message = self.message(&field, &violation.constraint);

        FieldError {
            field,
            message,
            tag: violation.tag().to_string(),
            param: violation.param(),
        }
    }

    pub fn format_all(&self, violations: &[Violation]) -> Vec<FieldError> {
        violations.iter().map(|v| self.format(v)).collect()
    }

    /// Validate a payload and format every violation
    ///
    /// Returns `Ok(())` when the payload satisfies its constraint table.
    pub fn validate_detailed<T: Constrained>(&self, payload: &T) -> Result<(), Vec<FieldError>> {
        let violations = validate(payload);
        if violations.is_empty() {
            return Ok(());
        }

        let errors = self.format_all(&violations);
        tracing::warn!(
            shape = T::constraint_set().shape,
            violations = errors.len(),
            "validation failed"
        );
        Err(errors)
    }

    fn message(&self, field: &str, constraint: &Constraint) -> String {
        let (template, param) = match constraint {
            Constraint::Required => (&self.templates.required, String::new()),
            Constraint::Min(n) => (&self.templates.min, n.to_string()),
            Constraint::Max(n) => (&self.templates.max, n.to_string()),
            Constraint::OneOf(values) => (&self.templates.one_of, values.join(", ")),
            Constraint::Custom { .. } => (&self.templates.fallback, String::new()),
        };

        template
            .replace("{field}", field)
            .replace("{param}", &param)
            .replace("{tag}", constraint.tag())
    }
}
