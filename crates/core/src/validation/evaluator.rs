//! Rule evaluator: pure logic, no database access.

use serde_json::{Map, Value};
use validator::ValidateEmail;

use super::rules::{Constraint, FieldRules, FieldViolation, ValidationResult};

/// Evaluate every field's rules against a single record.
///
/// All fields are checked; a failure on one never hides failures on another.
/// Within a field, evaluation stops at the first failing constraint.
pub fn evaluate_rules(rules: &[FieldRules], data: &Map<String, Value>) -> ValidationResult {
    let errors: Vec<FieldViolation> = rules
        .iter()
        .filter_map(|field| evaluate_field(field, data.get(field.field)))
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

fn evaluate_field(rules: &FieldRules, value: Option<&Value>) -> Option<FieldViolation> {
    let value = match value {
        Some(v) if is_filled(v) => v,
        // Empty optional fields are nullable: nothing else is checked.
        _ if rules.is_required() => {
            return Some(violation(rules, &Constraint::Required, value));
        }
        _ => return None,
    };

    rules
        .constraints
        .iter()
        .find(|c| !satisfies(c, value))
        .map(|c| violation(rules, c, Some(value)))
}

fn satisfies(constraint: &Constraint, value: &Value) -> bool {
    match constraint {
        Constraint::Required => true,
        // Text columns cannot store NUL.
        Constraint::String => value.as_str().is_some_and(|s| !s.contains('\0')),
        Constraint::Numeric => as_number(value).is_some(),
        Constraint::Boolean => as_bool(value).is_some(),
        Constraint::Email => value.as_str().is_some_and(|s| s.trim().validate_email()),
        // Non-numeric values are the `Numeric` rule's concern.
        Constraint::Min(min) => as_number(value).map_or(true, |n| n >= *min),
        Constraint::In(allowed) => value
            .as_str()
            .is_some_and(|s| allowed.contains(&s.trim())),
    }
}

fn violation(rules: &FieldRules, constraint: &Constraint, value: Option<&Value>) -> FieldViolation {
    FieldViolation {
        field: rules.field.to_string(),
        rule_type: constraint.name().to_string(),
        message: constraint.message(rules.label),
        value: value.cloned(),
    }
}

/// `null`, absent, and blank strings all count as "not provided".
pub fn is_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// Read a value as a finite number. Form bodies carry numbers as strings.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Read a value as a boolean, accepting the literals HTML forms submit.
pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim() {
            "1" | "true" => Some(true),
            "0" | "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
