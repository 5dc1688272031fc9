//! Validation rule and result types.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field name -> every message produced for that field, in rule order.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A single constraint applied to one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// The field must be present and non-empty.
    Required,
    /// The value must be a JSON string free of NUL characters.
    String,
    /// The value must be a number, or a string that parses as one.
    Numeric,
    /// The value must be `true`/`false`, `0`/`1`, or their string forms.
    Boolean,
    /// The value must be a well-formed email address.
    Email,
    /// The numeric value must be greater than or equal to the bound.
    Min(f64),
    /// The value must be one of the listed literals.
    In(&'static [&'static str]),
}

impl Constraint {
    /// Stable machine-readable name, reported in [`FieldViolation::rule_type`].
    pub fn name(&self) -> &'static str {
        match self {
            Constraint::Required => "required",
            Constraint::String => "string",
            Constraint::Numeric => "numeric",
            Constraint::Boolean => "boolean",
            Constraint::Email => "email",
            Constraint::Min(_) => "min",
            Constraint::In(_) => "in",
        }
    }

    /// Human-readable failure message for a field with the given label.
    pub fn message(&self, label: &str) -> String {
        match self {
            Constraint::Required => format!("The {label} field is required."),
            Constraint::String => format!("The {label} field must be a string."),
            Constraint::Numeric => format!("The {label} field must be a number."),
            Constraint::Boolean => format!("The {label} field must be true or false."),
            Constraint::Email => format!("The {label} field must be a valid email address."),
            Constraint::Min(min) => format!("The {label} field must be at least {min}."),
            Constraint::In(_) => format!("The selected {label} is invalid."),
        }
    }
}

/// The ordered constraint list for one field of a record.
#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    /// Key of the field in the submitted record.
    pub field: &'static str,
    /// Label used in messages (`"contact number"` for `contactNumber`).
    pub label: &'static str,
    pub constraints: &'static [Constraint],
}

impl FieldRules {
    pub fn is_required(&self) -> bool {
        self.constraints.contains(&Constraint::Required)
    }
}

/// Aggregated result of evaluating a rule table against one record.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<FieldViolation>,
}

impl ValidationResult {
    /// Group violations by field, preserving the order they were raised in.
    pub fn field_errors(&self) -> FieldErrors {
        let mut map = FieldErrors::new();
        for v in &self.errors {
            map.entry(v.field.clone()).or_default().push(v.message.clone());
        }
        map
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}
