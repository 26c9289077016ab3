//! Pre-flight check that a serializable value has an exact plain-data form.
//!
//! `serde_json` writes non-finite floats as `null`. Walking the value with [`FiniteCheck`] first
//! lets the clone helpers reject those values instead of dropping them.

use serde::ser::{
    self, Serialize, SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant,
    SerializeTuple, SerializeTupleStruct, SerializeTupleVariant, Serializer,
};

type CheckResult = Result<(), serde_json::Error>;

/// Returns an error naming the first non-finite float found in `value`.
pub(crate) fn ensure_finite<T>(value: &T) -> CheckResult
where
    T: ?Sized + Serialize,
{
    value.serialize(FiniteCheck)
}

fn check_float(value: f64) -> CheckResult {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ser::Error::custom(format!(
            "non-finite number {value} has no plain-data form"
        )))
    }
}

struct FiniteCheck;

impl Serializer for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _v: bool) -> CheckResult {
        Ok(())
    }

    fn serialize_i8(self, _v: i8) -> CheckResult {
        Ok(())
    }

    fn serialize_i16(self, _v: i16) -> CheckResult {
        Ok(())
    }

    fn serialize_i32(self, _v: i32) -> CheckResult {
        Ok(())
    }

    fn serialize_i64(self, _v: i64) -> CheckResult {
        Ok(())
    }

    fn serialize_i128(self, _v: i128) -> CheckResult {
        Ok(())
    }

    fn serialize_u8(self, _v: u8) -> CheckResult {
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> CheckResult {
        Ok(())
    }

    fn serialize_u32(self, _v: u32) -> CheckResult {
        Ok(())
    }

    fn serialize_u64(self, _v: u64) -> CheckResult {
        Ok(())
    }

    fn serialize_u128(self, _v: u128) -> CheckResult {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> CheckResult {
        check_float(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> CheckResult {
        check_float(v)
    }

    fn serialize_char(self, _v: char) -> CheckResult {
        Ok(())
    }

    fn serialize_str(self, _v: &str) -> CheckResult {
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> CheckResult {
        Ok(())
    }

    fn serialize_none(self) -> CheckResult {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> CheckResult
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> CheckResult {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> CheckResult {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> CheckResult {
        Ok(())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> CheckResult
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> CheckResult
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self, serde_json::Error> {
        Ok(self)
    }
}

impl SerializeSeq for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T>(&mut self, value: &T) -> CheckResult
    where
        T: ?Sized + Serialize,
    {
        ensure_finite(value)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl SerializeTuple for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T>(&mut self, value: &T) -> CheckResult
    where
        T: ?Sized + Serialize,
    {
        ensure_finite(value)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl SerializeTupleStruct for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T>(&mut self, value: &T) -> CheckResult
    where
        T: ?Sized + Serialize,
    {
        ensure_finite(value)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl SerializeTupleVariant for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T>(&mut self, value: &T) -> CheckResult
    where
        T: ?Sized + Serialize,
    {
        ensure_finite(value)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl SerializeMap for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_key<T>(&mut self, key: &T) -> CheckResult
    where
        T: ?Sized + Serialize,
    {
        ensure_finite(key)
    }

    fn serialize_value<T>(&mut self, value: &T) -> CheckResult
    where
        T: ?Sized + Serialize,
    {
        ensure_finite(value)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl SerializeStruct for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> CheckResult
    where
        T: ?Sized + Serialize,
    {
        ensure_finite(value)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}

impl SerializeStructVariant for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> CheckResult
    where
        T: ?Sized + Serialize,
    {
        ensure_finite(value)
    }

    fn end(self) -> CheckResult {
        Ok(())
    }
}
