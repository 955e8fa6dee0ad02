//! Insertion-ordered parameter mapping.
//!
//! [`ParamMap`] is the small ordered container used for matched path
//! parameters and for the values supplied to URL generation. It preserves
//! insertion order (which follows pattern segment order for matched
//! parameters) rather than relying on hash-map iteration order.

use super::constraint::ParamValue;

/// An insertion-ordered mapping from parameter name to typed value.
///
/// Backed by a `Vec`; lookups are linear, which is faster than hashing for
/// the handful of parameters a URL pattern carries.
///
/// # Examples
///
/// ```
/// use cadre_http::routing::{ParamMap, ParamValue};
///
/// let mut params = ParamMap::new();
/// params.insert("id", 42);
/// params.insert("slug", "hello");
///
/// assert_eq!(params.get("id"), Some(&ParamValue::Int(42)));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, ParamValue)>,
}

impl ParamMap {
    /// Creates an empty map.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a value. Replaces in place if the name is already present,
    /// keeping its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Returns the value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns whether a value is bound to `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the number of bound parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<N: Into<String>, V: Into<ParamValue>> FromIterator<(N, V)> for ParamMap {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}
