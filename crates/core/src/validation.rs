//! Field-level validation results.
//!
//! Entities declare their rules with `#[derive(validator::Validate)]`. The
//! rule set may be empty (planets carry none). [`validate`] runs the rules and
//! converts the outcome into [`ValidationErrors`], a flat, sorted list of
//! `(field, code)` pairs that callers can inspect without depending on the
//! `validator` crate's nested error tree.

use std::fmt;

use serde::Serialize;
use validator::Validate;

/// Code used when a referenced row (e.g. a mission's scientist) does not exist.
pub const CODE_UNKNOWN_REFERENCE: &str = "unknown_reference";

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// All violations found for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    /// A single violation for `field` with the given error `code`.
    pub fn single(field: impl Into<String>, code: impl Into<String>) -> Self {
        Self(vec![FieldViolation {
            field: field.into(),
            code: code.into(),
            message: None,
        }])
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Names of the offending fields, deduplicated, in sorted order.
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.0.iter().map(|v| v.field.as_str()).collect();
        fields.dedup();
        fields
    }

    /// Whether `field` has a violation with the given `code`.
    pub fn has(&self, field: &str, code: &str) -> bool {
        self.0.iter().any(|v| v.field == field && v.code == code)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.code))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| FieldViolation {
                    field: field.clone(),
                    code: e.code.to_string(),
                    message: e.message.as_ref().map(|m| m.to_string()),
                })
            })
            .collect();
        violations.sort();
        Self(violations)
    }
}

/// Run the declared rules of `value`.
pub fn validate<T: Validate>(value: &T) -> Result<(), ValidationErrors> {
    value.validate().map_err(ValidationErrors::from)
}
