//! Ordered key/value map holding one complete set of parameter values.

use rcparams_common::RcValue;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Parameter values in template declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamMap {
    entries: Vec<(String, RcValue)>,
    index: HashMap<String, usize>,
}

impl ParamMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a value. New keys go to the end; replaced keys keep
    /// their position. Returns the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: RcValue) -> Option<RcValue> {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[pos].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Returns the value of `key`.
    pub fn get(&self, key: &str) -> Option<&RcValue> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    /// True when `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Key/value pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RcValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys whose value differs from `other`, in this map's order.
    pub fn diff<'a>(&'a self, other: &'a Self) -> Vec<(&'a str, &'a RcValue)> {
        self.iter()
            .filter(|(k, v)| other.get(k) != Some(*v))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ParamMap {
    type Item = (&'a str, &'a RcValue);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a RcValue)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for ParamMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
