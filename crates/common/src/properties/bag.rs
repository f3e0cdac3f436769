use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use super::key::PropertyKey;
use super::value::PropertyValue;
use crate::error::PropertyError;

/// Key-unique mapping of properties.
///
/// Entries are kept in key order so iteration and the debug dump are
/// deterministic. On the wire the bag is a list of [`PropertyEntry`] because
/// numeric keys cannot be JSON object keys.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<PropertyEntry>", into = "Vec<PropertyEntry>")]
pub struct PropertyBag {
    entries: BTreeMap<PropertyKey, PropertyValue>,
}

/// Serialized form of a single bag entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub key: PropertyKey,
    pub value: PropertyValue,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &PropertyKey) -> Option<&PropertyValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &PropertyKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Sets a property, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<PropertyKey>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &PropertyKey) -> Option<PropertyValue> {
        self.entries.remove(key)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PropertyKey, PropertyValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, PropertyKey, PropertyValue> {
        self.entries.keys()
    }

    /// Looks up a property and converts it to `T`.
    ///
    /// Returns `Ok(None)` when the key is absent and an error when the stored
    /// value has the wrong type.
    pub fn get_as<T>(&self, key: &PropertyKey) -> Result<Option<T>, PropertyError>
    where
        T: TryFrom<PropertyValue, Error = PropertyError>,
    {
        self.entries
            .get(key)
            .cloned()
            .map(<T as TryFrom<PropertyValue>>::try_from)
            .transpose()
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&PropertyKey, &mut PropertyValue) -> bool) {
        self.entries.retain(keep);
    }
}

impl fmt::Display for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::debug::write_bag(f, self)
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyBag
where
    K: Into<PropertyKey>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for PropertyBag {
    type Item = (PropertyKey, PropertyValue);
    type IntoIter = btree_map::IntoIter<PropertyKey, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyBag {
    type Item = (&'a PropertyKey, &'a PropertyValue);
    type IntoIter = btree_map::Iter<'a, PropertyKey, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<PropertyEntry>> for PropertyBag {
    fn from(entries: Vec<PropertyEntry>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect()
    }
}

impl From<PropertyBag> for Vec<PropertyEntry> {
    fn from(bag: PropertyBag) -> Self {
        bag.into_iter()
            .map(|(key, value)| PropertyEntry { key, value })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_existing() {
        let mut bag = PropertyBag::new();
        assert_eq!(bag.insert("hp", 10), None);
        assert_eq!(bag.insert("hp", 12), Some(PropertyValue::Int(10)));
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get(&"hp".into()), Some(&PropertyValue::Int(12)));
    }

    #[test]
    fn test_keys_are_ordered() {
        let bag: PropertyBag = [
            (PropertyKey::from("b"), PropertyValue::Int(2)),
            (PropertyKey::Byte(255), PropertyValue::from("Ann")),
            (PropertyKey::from("a"), PropertyValue::Int(1)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<_> = bag.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                PropertyKey::Byte(255),
                PropertyKey::from("a"),
                PropertyKey::from("b")
            ]
        );
    }

    #[test]
    fn test_get_as() {
        let bag: PropertyBag = [("hp", PropertyValue::Int(10)), ("name", "Ann".into())]
            .into_iter()
            .collect();

        assert_eq!(bag.get_as::<i32>(&"hp".into()), Ok(Some(10)));
        assert_eq!(bag.get_as::<i32>(&"missing".into()), Ok(None));
        assert_eq!(
            bag.get_as::<i32>(&"name".into()),
            Err(PropertyError::unexpected_type("int", "string"))
        );
    }

    #[test]
    fn test_serializes_as_entry_list() {
        let bag: PropertyBag = [(PropertyKey::Integer(1), PropertyValue::from("x"))]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&bag).expect("serializes");
        assert_eq!(
            json,
            r#"[{"key":{"type":"integer","value":1},"value":{"type":"text","value":"x"}}]"#
        );

        let back: PropertyBag = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, bag);
    }
}
