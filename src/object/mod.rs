//! Stateless helpers for key-value mappings.
//!
//! A mapping is a [`serde_json::Map`] with insertion-ordered string keys. Absent values are
//! modelled as `None` and explicit nulls as [`Value::Null`](serde_json::Value::Null).

pub mod clone;
pub mod defaults;
pub mod entries;
pub mod error;
pub mod merge;
mod plain;
pub mod predicates;
pub mod sort;

pub type Mapping = serde_json::Map<String, serde_json::Value>;

pub use clone::{clone_value, deep_clone};
pub use defaults::{is_empty_like, property_value_with_default, value_with_default};
pub use entries::{map_object, map_values};
pub use error::{ObjectError, ObjectErrorCode, ObjectResult};
pub use merge::{copy_properties, merge};
pub use predicates::{is_defined, is_object, safe_get};
pub use sort::{compare_property, sort_object, sort_object_by_property};
