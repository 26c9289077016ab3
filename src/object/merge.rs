use std::borrow::Borrow;

use serde::Serialize;
use serde_json::Value;

use crate::object::clone::clone_value;
use crate::object::error::{expected_object, ObjectResult};
use crate::object::Mapping;

/// Overlays `objects` left to right into a new mapping.
///
/// Keys from later mappings overwrite earlier ones. Nested values are copied whole, never merged
/// recursively. No input yields an empty mapping.
pub fn merge<I>(objects: I) -> Mapping
where
    I: IntoIterator,
    I::Item: Borrow<Mapping>,
{
    let mut result = Mapping::new();
    for object in objects {
        for (key, value) in object.borrow() {
            result.insert(key.clone(), value.clone());
        }
    }
    result
}

/// Variadic form of [`merge`](fn@crate::object::merge). Accepts owned mappings or references.
#[macro_export]
macro_rules! merge {
    () => {
        $crate::object::Mapping::new()
    };
    ($($object:expr),+ $(,)?) => {
        $crate::object::merge([
            $(::core::borrow::Borrow::<$crate::object::Mapping>::borrow(&$object)),+
        ])
    };
}

/// Copies every property of `source` into `destination`.
///
/// The source is deep-cloned first, so `destination` never aliases it. When `overwrite` is
/// `Some(true)` existing keys are replaced; otherwise (`Some(false)` or `None`) they are kept and
/// only missing keys are added. New keys are appended in the source's order.
pub fn copy_properties<T>(
    source: &T,
    destination: &mut Mapping,
    overwrite: Option<bool>,
) -> ObjectResult<()>
where
    T: ?Sized + Serialize,
{
    let cloned = match clone_value(source)? {
        Value::Object(map) => map,
        other => return Err(expected_object("copy_properties", Some(&other))),
    };
    let overwrite = overwrite.unwrap_or(false);
    for (key, value) in cloned {
        if overwrite || !destination.contains_key(&key) {
            destination.insert(key, value);
        }
    }
    Ok(())
}
