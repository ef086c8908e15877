use std::cmp::Ordering;

use serde_json::{Number, Value};

use super::{Condition, Direction, Operator, Sort};
use crate::record::Record;

pub(super) fn satisfies(actual: &Value, condition: &Condition) -> bool {
    let expected = &condition.value;
    match condition.operator {
        Operator::Eq => values_equal(actual, expected),
        Operator::Contains => text_pair(actual, expected).is_some_and(|(a, b)| a.contains(&b)),
        Operator::StartsWith => {
            text_pair(actual, expected).is_some_and(|(a, b)| a.starts_with(&b))
        }
        Operator::EndsWith => text_pair(actual, expected).is_some_and(|(a, b)| a.ends_with(&b)),
        Operator::Gt => compare_values(actual, expected) == Some(Ordering::Greater),
        Operator::Gte => matches!(
            compare_values(actual, expected),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        Operator::Lt => compare_values(actual, expected) == Some(Ordering::Less),
        Operator::Lte => matches!(
            compare_values(actual, expected),
            Some(Ordering::Less | Ordering::Equal)
        ),
    }
}

/// Lower-cased operands when both are strings.
fn text_pair(actual: &Value, expected: &Value) -> Option<(String, String)> {
    match (actual, expected) {
        (Value::String(a), Value::String(b)) => Some((a.to_lowercase(), b.to_lowercase())),
        _ => None,
    }
}

fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y) == Some(Ordering::Equal),
        _ => a == b,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return Some(x.cmp(&y));
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return Some(x.cmp(&y));
    }
    a.as_f64()?.partial_cmp(&b.as_f64()?)
}

/// Order two values of the same scalar type: numbers numerically, strings
/// lexicographically, booleans false < true. `None` for anything else.
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => compare_numbers(x, y),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

/// Type group for sorting mixed values; `None` sorts after everything.
fn rank(value: Option<&Value>) -> Option<u8> {
    match value? {
        Value::Bool(_) => Some(0),
        Value::Number(_) => Some(1),
        Value::String(_) => Some(2),
        _ => None,
    }
}

pub(super) fn sort_order(a: &Record, b: &Record, sort: &Sort) -> Ordering {
    let (va, vb) = (a.get(&sort.field), b.get(&sort.field));
    let ordering = match (rank(va), rank(vb)) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(ra), Some(rb)) if ra != rb => ra.cmp(&rb),
        (Some(_), Some(_)) => match (va, vb) {
            (Some(x), Some(y)) => compare_values(x, y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
    };
    match sort.direction {
        Direction::Asc => ordering,
        Direction::Desc => ordering.reverse(),
    }
}
