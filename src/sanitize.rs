//! Input sanitization applied to records before they are persisted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::record::Record;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("static regex"));

/// Remove markup tags and surrounding whitespace from a string.
pub fn sanitize_text(text: &str) -> String {
    TAG.replace_all(text, "").trim().to_string()
}

/// Sanitize every string in `value`, descending into objects and arrays.
pub fn sanitize_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_text(&s)),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize_value).collect()),
        Value::Object(map) => Value::Object(sanitize_record(map)),
        other => other,
    }
}

pub fn sanitize_record(record: Record) -> Record {
    record
        .into_iter()
        .map(|(field, value)| (field, sanitize_value(value)))
        .collect()
}
