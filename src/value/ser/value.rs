use serde::ser::{Impossible, Serialize};

use crate::value::ser::list::SerializeList;
use crate::{Error, Result, Value};

/// Serializer for a single entry of the values mapping.
///
/// Returns `None` for values that should be treated as missing.
pub struct ValueSerializer;

impl serde::Serializer for ValueSerializer {
    type Ok = Option<Value>;
    type Error = Error;

    type SerializeSeq = SerializeList;
    type SerializeTuple = SerializeList;
    type SerializeTupleStruct = SerializeList;

    type SerializeMap = Impossible<Option<Value>, Error>;
    type SerializeStruct = Impossible<Option<Value>, Error>;

    type SerializeTupleVariant = Impossible<Option<Value>, Error>;
    type SerializeStructVariant = Impossible<Option<Value>, Error>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        Ok(Some(Value::from(v)))
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        Ok(Some(Value::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        Ok(Some(Value::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        Ok(Some(Value::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        Ok(Some(Value::from(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        Ok(Some(Value::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        Ok(Some(Value::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        Ok(Some(Value::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        Ok(Some(Value::from(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        Ok(Some(Value::String(v.to_string())))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        Ok(Some(Value::String(v.to_string())))
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        Ok(Some(Value::from(v)))
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        Ok(Some(Value::from(v)))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(err_unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_some<T: ?Sized>(self, value: &T) -> Result<Self::Ok>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(None)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T: ?Sized>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok>
    where
        T: Serialize,
    {
        Err(err_unsupported("enum variant"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SerializeList::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(err_unsupported("enum variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(err_unsupported("map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(err_unsupported("struct"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(err_unsupported("enum variant"))
    }
}

pub fn err_unsupported(kind: &str) -> Error {
    Error::message(format!(
        "unsupported value: expected a string or a list of strings, found {kind}"
    ))
}
