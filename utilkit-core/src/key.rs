//! Canonical cache keys for [`Memoizer`](crate::Memoizer).
//!
//! A key is the compact JSON text of the argument after it has passed through
//! `serde_json::Value`, whose objects keep their keys sorted. Two equal maps
//! therefore produce the same key whatever order they iterate in.
//!
//! JSON has no spelling for NaN or the infinities and `serde_json` writes
//! them all as `null`, which would collide with each other and with `None`.
//! Arguments holding a non-finite float are rejected before encoding.

use serde::ser::{self, Error as _, Serialize};

use crate::error::UtilError;

/// Builds the cache key for `args`
pub(crate) fn cache_key<T: Serialize + ?Sized>(args: &T) -> Result<String, UtilError> {
    args.serialize(FiniteFloats)
        .map_err(UtilError::KeySerialization)?;

    let value = serde_json::to_value(args).map_err(UtilError::KeySerialization)?;
    serde_json::to_string(&value).map_err(UtilError::KeySerialization)
}

/// Walks a value and fails on the first NaN or infinite float
#[derive(Clone, Copy)]
struct FiniteFloats;

type ScanResult = Result<(), serde_json::Error>;

fn check_float(value: f64) -> ScanResult {
    if value.is_finite() {
        Ok(())
    } else {
        Err(serde_json::Error::custom(format!(
            "non-finite float {value} has no distinct JSON key"
        )))
    }
}

macro_rules! accept {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(fn $method(self, _: $ty) -> ScanResult { Ok(()) })*
    };
}

impl ser::Serializer for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    accept! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_char: char,
        serialize_str: &str,
        serialize_bytes: &[u8],
        serialize_unit_struct: &'static str,
    }

    fn serialize_f32(self, v: f32) -> ScanResult {
        check_float(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> ScanResult {
        check_float(v)
    }

    fn serialize_none(self) -> ScanResult {
        Ok(())
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> ScanResult {
        value.serialize(self)
    }

    fn serialize_unit(self) -> ScanResult {
        Ok(())
    }

    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> ScanResult {
        Ok(())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _: &'static str,
        value: &T,
    ) -> ScanResult {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> ScanResult {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple(self, _: usize) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self, serde_json::Error> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self, serde_json::Error> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> ScanResult {
        value.serialize(*self)
    }

    fn end(self) -> ScanResult {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> ScanResult {
        value.serialize(*self)
    }

    fn end(self) -> ScanResult {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> ScanResult {
        value.serialize(*self)
    }

    fn end(self) -> ScanResult {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> ScanResult {
        value.serialize(*self)
    }

    fn end(self) -> ScanResult {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> ScanResult {
        key.serialize(*self)
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> ScanResult {
        value.serialize(*self)
    }

    fn end(self) -> ScanResult {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _: &'static str, value: &T) -> ScanResult {
        value.serialize(*self)
    }

    fn end(self) -> ScanResult {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteFloats {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _: &'static str, value: &T) -> ScanResult {
        value.serialize(*self)
    }

    fn end(self) -> ScanResult {
        Ok(())
    }
}
