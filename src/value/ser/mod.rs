//! Conversion of any `T: Serialize` map or struct into [`Values`].
//!
//! The top level must be a map or struct. Each entry must be a scalar,
//! which is converted to a string, or a sequence of scalars. Entries that are
//! `None` or unit are left out so that the variable is treated as missing.

mod list;
mod map;
mod value;

use serde::ser::{Impossible, Serialize};

use crate::value::ser::map::SerializeMap;
use crate::{Error, Result, Value, Values};

/// Convert a `T` to [`Values`].
///
/// # Examples
///
/// ```
/// #[derive(serde::Serialize)]
/// struct Query {
///     q: &'static str,
///     tags: Vec<&'static str>,
///     page: Option<u32>,
/// }
///
/// let values = uri_template::to_values(Query {
///     q: "rust",
///     tags: vec!["a", "b"],
///     page: None,
/// })?;
///
/// assert_eq!(values.len(), 2);
/// assert!(values.get("page").is_none());
/// # Ok::<(), uri_template::Error>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub fn to_values<T>(values: T) -> Result<Values>
where
    T: Serialize,
{
    values.serialize(Serializer)
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::String(string) => serializer.serialize_str(string),
            Value::List(list) => list.serialize(serializer),
        }
    }
}

impl Serialize for Values {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self)
    }
}

/// Serializer whose output is [`Values`].
pub struct Serializer;

impl serde::Serializer for Serializer {
    type Ok = Values;
    type Error = Error;

    type SerializeSeq = Impossible<Values, Error>;
    type SerializeTuple = Impossible<Values, Error>;
    type SerializeTupleStruct = Impossible<Values, Error>;

    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;

    type SerializeTupleVariant = Impossible<Values, Error>;
    type SerializeStructVariant = Impossible<Values, Error>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok> {
        Err(err_expected_map())
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_some<T: ?Sized>(self, value: &T) -> Result<Self::Ok>
    where
        T: Serialize,
    {
        value.serialize(self)
    }

    // No values at all, every variable is missing.
    fn serialize_unit(self) -> Result<Self::Ok> {
        Ok(Values::new())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok> {
        Err(err_expected_map())
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
        Err(err_expected_map())
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(err_expected_map())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(err_expected_map())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(err_expected_map())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(err_expected_map())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(err_expected_map())
    }
}

fn err_expected_map() -> Error {
    Error::message("expected a map or struct of values")
}
