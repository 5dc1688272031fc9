//! Declarative field validation.
//!
//! Rule tables are plain `&'static` data ([`rules::FieldRules`]) evaluated
//! uniformly by [`evaluator::evaluate_rules`] against an untyped record.

pub mod evaluator;
pub mod rules;
