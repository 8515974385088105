use crate::value::is_truthy;
use serde_json::Value;

/// A loosely-typed attribute value accepted by the lenient builder.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AttributeValue {
    /// A string.
    Text(String),
    /// A boolean. `true` renders a bare attribute and `false` omits it.
    Flag(bool),
    /// An integer.
    Integer(i64),
    /// An omitted attribute.
    Omit,
    /// A JSON tree, e.g. a list of classes or a blob for a `data-*` attribute.
    Structured(Value),
}

impl AttributeValue {
    /// Returns whether the value is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty() && text != "0",
            Self::Flag(flag) => *flag,
            Self::Integer(integer) => *integer != 0,
            Self::Omit => false,
            Self::Structured(value) => is_truthy(value),
        }
    }

    /// Converts the value into a JSON value.
    pub fn into_json(self) -> Value {
        match self {
            Self::Text(text) => text.into(),
            Self::Flag(flag) => flag.into(),
            Self::Integer(integer) => integer.into(),
            Self::Omit => Value::Null,
            Self::Structured(value) => value,
        }
    }

    /// Returns the value as a string if it is a scalar.
    ///
    /// `true` becomes `1` and `false` becomes an empty string.
    pub(crate) fn scalar_text(&self) -> Option<String> {
        match self {
            Self::Text(text) | Self::Structured(Value::String(text)) => Some(text.clone()),
            Self::Integer(integer) => Some(integer.to_string()),
            Self::Structured(Value::Number(number)) => Some(number.to_string()),
            Self::Flag(flag) | Self::Structured(Value::Bool(flag)) => {
                Some(if *flag { "1" } else { "" }.to_owned())
            }
            Self::Omit | Self::Structured(_) => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for AttributeValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<i64> for AttributeValue {
    fn from(integer: i64) -> Self {
        Self::Integer(integer)
    }
}

impl From<Value> for AttributeValue {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Omit, Into::into)
    }
}

/// A sanitized attribute value accepted by the strict builder.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StrictValue {
    /// A string placed in double quotes as is.
    Text(String),
    /// A boolean. `true` renders a bare attribute and `false` omits it.
    Flag(bool),
}

impl From<&str> for StrictValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for StrictValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for StrictValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

/// An attribute map ordered by insertion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttributeMap<V> {
    entries: Vec<(String, V)>,
}

/// Attributes accepted by the lenient builder.
pub type Attributes = AttributeMap<AttributeValue>;

/// Attributes accepted by the strict builder.
pub type StrictAttributes = AttributeMap<StrictValue>;

impl<V> AttributeMap<V> {
    /// Creates an empty attribute map.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns an attribute value.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns a mutable attribute value.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if an attribute exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Inserts an attribute.
    ///
    /// An existing attribute keeps its position and its old value is returned.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<V>) -> Option<V> {
        let name = name.into();
        let value = value.into();

        if let Some(existing) = self.get_mut(&name) {
            Some(core::mem::replace(existing, value))
        } else {
            self.entries.push((name, value));
            None
        }
    }

    /// Removes an attribute.
    pub fn remove(&mut self, name: &str) -> Option<V> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;

        Some(self.entries.remove(index).1)
    }

    /// Returns attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there is no attribute.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for AttributeMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, T: Into<V>, V> FromIterator<(K, T)> for AttributeMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iterator: I) -> Self {
        let mut attributes = Self::new();

        for (name, value) in iterator {
            attributes.insert(name, value);
        }

        attributes
    }
}

impl<V> IntoIterator for AttributeMap<V> {
    type Item = (String, V);
    type IntoIter = alloc::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
