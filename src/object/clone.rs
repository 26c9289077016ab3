use serde::Serialize;
use serde_json::Value;

use crate::object::error::{serialization_loss, ObjectError, ObjectResult};
use crate::object::plain::ensure_finite;

/// Returns a structurally independent copy of `value`.
///
/// Mappings and sequences are copied recursively and scalars are passed through, so mutating the
/// copy never affects the source. `deep_clone(x) == x` holds for every value.
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, entry)| (key.clone(), deep_clone(entry)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(deep_clone).collect()),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => value.clone(),
    }
}

/// Deep-copies any serializable value into plain data.
///
/// Fails with `SerializationLoss` when the value has no exact plain-data form: a non-finite float
/// anywhere in the tree, a map keyed by tuples, or a `Serialize` impl that reports an error.
pub fn clone_value<T>(value: &T) -> ObjectResult<Value>
where
    T: ?Sized + Serialize,
{
    ensure_finite(value)
        .and_then(|()| serde_json::to_value(value))
        .map_err(lossy)
}

fn lossy(err: serde_json::Error) -> ObjectError {
    let error = serialization_loss(format!("value cannot be cloned as plain data: {err}"));
    log::debug!("{error}");
    error
}
