use serde_json::Value;

use crate::object::error::{expected_object, ObjectResult};
use crate::object::Mapping;

/// Builds a new mapping with the same keys as `input`, each value produced by `f(value, key, input)`.
///
/// `f` runs exactly once per key, in insertion order.
pub fn map_values<F, R>(input: &Mapping, mut f: F) -> Mapping
where
    F: FnMut(&Value, &str, &Mapping) -> R,
    R: Into<Value>,
{
    let mut result = Mapping::new();
    for (key, value) in input.iter() {
        result.insert(key.clone(), f(value, key, input).into());
    }
    result
}

/// [`map_values`] for callers holding an arbitrary value; anything but a mapping is a
/// `TypeMismatch`.
pub fn map_object<F, R>(obj: &Value, f: F) -> ObjectResult<Mapping>
where
    F: FnMut(&Value, &str, &Mapping) -> R,
    R: Into<Value>,
{
    match obj {
        Value::Object(map) => Ok(map_values(map, f)),
        other => Err(expected_object("map_object", Some(other))),
    }
}
