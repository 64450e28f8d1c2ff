//! Loose comparison between a record field and a condition value.
//!
//! Record fields are arbitrary JSON while condition values are text (or
//! numbers under the strict grammar), so comparison coerces:
//!
//! - `=` compares numerically when both sides read as numbers, otherwise
//!   compares the two strings.
//! - `>` and `<` order two strings lexicographically; any other pairing is
//!   ordered numerically, and a side that is not a number never matches.
//! - A missing field, `null`, an array or an object never matches.

use std::cmp::Ordering;

use serde_json::Value;

use super::{ConditionValue, Operator};

/// A comparable view of either side.
#[derive(Debug, Clone, Copy)]
enum Operand<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> Operand<'a> {
    fn from_field(value: &'a Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(Operand::Number),
            Value::String(s) => Some(Operand::Text(s)),
            Value::Bool(b) => Some(Operand::Number(if *b { 1.0 } else { 0.0 })),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn from_condition(value: &'a ConditionValue) -> Self {
        match value {
            ConditionValue::Text(s) => Operand::Text(s),
            ConditionValue::Number(n) => Operand::Number(*n),
        }
    }

    fn as_number(self) -> Option<f64> {
        match self {
            Operand::Number(n) => Some(n),
            Operand::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
            }
        }
    }
}

/// Evaluate `field <operator> value`.
///
/// `field` is `None` when the record has no such field.
pub fn compare(operator: Operator, field: Option<&Value>, value: &ConditionValue) -> bool {
    let Some(left) = field.and_then(Operand::from_field) else {
        return false;
    };
    let right = Operand::from_condition(value);

    match operator {
        Operator::Eq => equals(left, right),
        Operator::Gt => ordering(left, right) == Some(Ordering::Greater),
        Operator::Lt => ordering(left, right) == Some(Ordering::Less),
    }
}

fn equals(left: Operand<'_>, right: Operand<'_>) -> bool {
    if let (Some(a), Some(b)) = (left.as_number(), right.as_number()) {
        return a == b;
    }
    match (left, right) {
        (Operand::Text(a), Operand::Text(b)) => a == b,
        _ => false,
    }
}

fn ordering(left: Operand<'_>, right: Operand<'_>) -> Option<Ordering> {
    match (left, right) {
        (Operand::Text(a), Operand::Text(b)) => Some(a.cmp(b)),
        _ => left.as_number()?.partial_cmp(&right.as_number()?),
    }
}
