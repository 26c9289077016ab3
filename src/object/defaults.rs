//! Fallback helpers for values that may be missing.
//!
//! `None` stands for an absent value and `Value::Null` for an explicit null; both count as
//! "not defined" here.

use serde_json::Value;

use crate::object::predicates::{is_defined, safe_get};

/// Returns `default_value` when `obj` is absent or null, otherwise `obj` itself.
///
/// Falsy but defined values such as `0`, `false` or `""` are returned as-is.
pub fn value_with_default<'a>(obj: Option<&'a Value>, default_value: &'a Value) -> &'a Value {
    match obj {
        Some(value) if is_defined(Some(value)) => value,
        _ => default_value,
    }
}

/// Reads `property_name` from `obj`, falling back to `default_value`.
///
/// The default is used when `obj` is absent, null or not a mapping, when the property is missing
/// or null, and when the property is empty-like (see [`is_empty_like`]). An explicit `""` is
/// therefore indistinguishable from a missing property; callers that care must read the mapping
/// directly.
pub fn property_value_with_default<'a>(
    obj: Option<&'a Value>,
    property_name: &str,
    default_value: &'a Value,
) -> &'a Value {
    match obj.and_then(|value| safe_get(value, property_name)) {
        Some(value) if !is_empty_like(value) => value,
        _ => default_value,
    }
}

/// True when the canonical text form of `value` is empty.
///
/// That covers null, `""`, the empty sequence, and a one-element sequence whose element is
/// empty-like (`[""]`, `[[null]]`). Sequences of two or more elements always have text because
/// their elements are comma-joined. Numbers, booleans, mappings and non-empty strings always have
/// text too.
pub fn is_empty_like(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => match items.as_slice() {
            [] => true,
            [only] => is_empty_like(only),
            _ => false,
        },
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => false,
    }
}
