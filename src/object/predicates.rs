use serde_json::Value;

/// True iff `obj` is present and not null.
pub fn is_defined(obj: Option<&Value>) -> bool {
    !matches!(obj, None | Some(Value::Null))
}

/// Lightweight guard for container values. Sequences count as objects too.
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Looks `key` up when `obj` is a mapping; any other value yields `None`.
pub fn safe_get<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    match obj {
        Value::Object(map) => map.get(key),
        _ => None,
    }
}
