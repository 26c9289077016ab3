use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::object::error::{expected_object, ObjectResult};
use crate::object::predicates::safe_get;
use crate::object::Mapping;

/// Rebuilds `obj` with its keys in ascending code-point order.
///
/// Entries are moved into the result, never copied; clone the input first to keep the original.
pub fn sort_object(obj: Value) -> ObjectResult<Mapping> {
    let map = match obj {
        Value::Object(map) => map,
        other => return Err(expected_object("sort_object", Some(&other))),
    };
    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    entries.sort_by(|(left, _), (right, _)| left.cmp(right));
    Ok(entries.into_iter().collect())
}

/// Orders the entries of `obj` by `value[property_name]`, ascending.
///
/// The sort is stable, so entries whose properties compare equal keep their original order.
/// Properties that are missing, or whose entry is not a mapping, sort first. After that come
/// null, booleans, numbers, strings and finally containers, which all compare equal to one
/// another. See [`compare_property`].
pub fn sort_object_by_property(
    obj: &Value,
    property_name: &str,
) -> ObjectResult<Vec<(String, Value)>> {
    let map = match obj {
        Value::Object(map) => map,
        other => return Err(expected_object("sort_object_by_property", Some(other))),
    };
    let mut entries: Vec<(String, Value)> = map
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    entries.sort_by(|(_, left), (_, right)| {
        compare_property(safe_get(left, property_name), safe_get(right, property_name))
    });
    Ok(entries)
}

/// Three-way comparison of two optional property values.
///
/// Values of the same kind compare naturally: `false < true`, numbers numerically and strings by
/// code point. Different kinds are ordered missing, null, boolean, number, string, container.
pub fn compare_property(left: Option<&Value>, right: Option<&Value>) -> Ordering {
    match (left, right) {
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => compare_numbers(a, b),
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        _ => rank(left).cmp(&rank(right)),
    }
}

fn rank(value: Option<&Value>) -> u8 {
    match value {
        None => 0,
        Some(Value::Null) => 1,
        Some(Value::Bool(_)) => 2,
        Some(Value::Number(_)) => 3,
        Some(Value::String(_)) => 4,
        Some(Value::Array(_)) | Some(Value::Object(_)) => 5,
    }
}

fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (as_integer(a), as_integer(b)) {
        return a.cmp(&b);
    }
    // serde_json numbers are always finite.
    let a = a.as_f64().unwrap_or_default();
    let b = b.as_f64().unwrap_or_default();
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn as_integer(number: &Number) -> Option<i128> {
    number
        .as_i64()
        .map(i128::from)
        .or_else(|| number.as_u64().map(i128::from))
}
