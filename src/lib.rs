#![doc = include_str!("RUSTDOC.md")]

pub mod object;

pub use object::{
    clone_value, copy_properties, deep_clone, is_defined, is_object, map_object, merge,
    property_value_with_default, sort_object, sort_object_by_property, value_with_default,
    Mapping, ObjectError, ObjectResult,
};
