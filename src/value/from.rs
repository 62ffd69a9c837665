use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::{Value, Values};

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::String(b.to_string())
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::String(String::from(c))
    }
}

macro_rules! impl_from_int {
    ($($ty:ty)+) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Self::String(i.to_string())
                }
            }
        )+
    };
}

impl_from_int! { u8 u16 u32 u64 usize i8 i16 i32 i64 isize }

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<'a> From<&'a str> for Value {
    fn from(s: &'a str) -> Self {
        Self::String(String::from(s))
    }
}

impl<'a> From<&'a String> for Value {
    fn from(s: &'a String) -> Self {
        Self::String(s.clone())
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    fn from(s: Cow<'a, str>) -> Self {
        Self::String(s.into_owned())
    }
}

impl<V> From<Vec<V>> for Value
where
    V: Into<String>,
{
    fn from(list: Vec<V>) -> Self {
        Self::List(list.into_iter().map(Into::into).collect())
    }
}

impl<V, const N: usize> From<[V; N]> for Value
where
    V: Into<String>,
{
    fn from(list: [V; N]) -> Self {
        Self::List(list.into_iter().map(Into::into).collect())
    }
}

impl<'a, V> From<&'a [V]> for Value
where
    V: Clone + Into<String>,
{
    fn from(list: &'a [V]) -> Self {
        Self::List(list.iter().cloned().map(Into::into).collect())
    }
}

impl<V> FromIterator<V> for Value
where
    V: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

impl<K, V> From<BTreeMap<K, V>> for Values
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> From<HashMap<K, V>> for Values
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(map: HashMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Values
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(map: [(K, V); N]) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut values = Values::new();
        values.extend(iter);
        values
    }
}

impl<K, V> Extend<(K, V)> for Values
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}
