use serde::ser::Serialize;

use crate::value::ser::value::{err_unsupported, ValueSerializer};
use crate::{Error, Result, Value};

#[derive(Default)]
pub struct SerializeList {
    list: Vec<String>,
}

impl SerializeList {
    pub fn with_capacity(len: usize) -> Self {
        Self {
            list: Vec::with_capacity(len),
        }
    }
}

impl serde::ser::SerializeSeq for SerializeList {
    type Ok = Option<Value>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match value.serialize(ValueSerializer)? {
            Some(Value::String(s)) => self.list.push(s),
            Some(Value::List(_)) => return Err(err_unsupported("nested list")),
            None => return Err(err_unsupported("none in list")),
        }
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Some(Value::List(self.list)))
    }
}

impl serde::ser::SerializeTuple for SerializeList {
    type Ok = Option<Value>;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        serde::ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        serde::ser::SerializeSeq::end(self)
    }
}

impl serde::ser::SerializeTupleStruct for SerializeList {
    type Ok = Option<Value>;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        serde::ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Self::Ok> {
        serde::ser::SerializeSeq::end(self)
    }
}
