//! Defines the [`Value`] enum and the [`Values`] mapping that templates are
//! expanded with.

mod from;
#[cfg(feature = "serde")]
mod ser;

use std::collections::btree_map;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
pub use crate::value::ser::to_values;

/// A value substituted into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    List(Vec<String>),
}

/// A mapping of variable name to [`Value`].
///
/// A variable that is not present in the mapping is "missing" and resolves
/// to the default declared in the template, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    map: BTreeMap<String, Value>,
}

impl Value {
    /// Returns the string if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// Returns the list if this is a [`Value::List`].
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::String(_) => None,
            Self::List(list) => Some(list),
        }
    }

    /// Apply `f` to the string or to every element of the list.
    pub(crate) fn map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        match self {
            Self::String(s) => Self::String(f(s)),
            Self::List(list) => Self::List(list.iter().map(|s| f(s)).collect()),
        }
    }
}

impl Values {
    /// Construct an empty mapping.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value for the name if any.
    pub fn insert<K, V>(&mut self, name: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.map.insert(name.into(), value.into())
    }

    /// Returns the value for the given name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    /// Remove the value for the given name.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.map.remove(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over the values, ordered by name.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.map.iter()
    }
}

impl<'a> IntoIterator for &'a Values {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Values {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}
