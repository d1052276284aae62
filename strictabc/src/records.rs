//! Immutable attribute records.
//!
//! An [`AttrRecord`] is an insertion-ordered map whose keys are all usable as
//! attribute names. It is validated once at construction and offers no way
//! to change it afterwards.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::ops::Index;

use crate::errors::InvalidKeyError;
use crate::utils::is_valid_key;

/// Insertion-ordered, immutable map from identifier keys to JSON values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrRecord {
    entries: Vec<(String, Value)>,
}

impl AttrRecord {
    /// Builds a record from key/value pairs.
    ///
    /// A repeated key keeps its first position and takes the last value.
    /// Every key that is not an identifier, or is a keyword or soft keyword,
    /// is reported in a single error.
    pub fn new<I, K>(pairs: I) -> Result<Self, InvalidKeyError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut entries: Vec<(String, Value)> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }

        let invalid: Vec<String> = entries
            .iter()
            .filter(|(key, _)| !is_valid_key(key))
            .map(|(key, _)| key.clone())
            .collect();
        if !invalid.is_empty() {
            return Err(InvalidKeyError::new(invalid));
        }

        Ok(Self { entries })
    }

    /// Looks up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// True if the record has `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Index<&str> for AttrRecord {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no attribute '{key}' in record"),
        }
    }
}

impl Serialize for AttrRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttrRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = AttrRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with identifier keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AttrRecord, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    pairs.push((key, value));
                }
                AttrRecord::new(pairs).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
