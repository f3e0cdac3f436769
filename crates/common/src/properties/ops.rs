//! Merge and strip operations on property bags.
//!
//! The mutating operations take `&mut PropertyBag` for the target and
//! `Option<&PropertyBag>` for the source. A bag can never be merged into
//! itself: the borrow checker rejects passing the same bag as both.

use super::bag::PropertyBag;
use super::key::PropertyKey;

/// Copies every entry of `source` into `target`.
///
/// Existing keys are overwritten, new keys are added, and keys only present
/// in `target` are left alone. `None` is a no-op.
///
/// # Examples
///
/// ```
/// use netprops_common::{merge, PropertyBag};
///
/// let mut target: PropertyBag = [("a", 1)].into_iter().collect();
/// let source: PropertyBag = [("a", 2), ("b", 3)].into_iter().collect();
///
/// merge(&mut target, Some(&source));
/// assert_eq!(target, source);
/// ```
pub fn merge(target: &mut PropertyBag, source: Option<&PropertyBag>) {
    let Some(source) = source else {
        return;
    };

    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
    tracing::trace!("Merged {} properties", source.len());
}

/// Like [`merge`], but only copies entries with string keys.
///
/// Non-string keys already in `target` stay there.
pub fn merge_string_keys(target: &mut PropertyBag, source: Option<&PropertyBag>) {
    let Some(source) = source else {
        return;
    };

    let mut merged = 0;
    for (key, value) in source {
        match key {
            PropertyKey::Text(_) => {
                target.insert(key.clone(), value.clone());
                merged += 1;
            }
            PropertyKey::Byte(_) | PropertyKey::Integer(_) => {}
        }
    }
    tracing::trace!(
        "Merged {} of {} properties with string keys",
        merged,
        source.len()
    );
}

/// Returns a new bag holding only the string-keyed entries of `original`.
///
/// Nested bags are copied as they are; their keys are not filtered.
pub fn strip_to_string_keys(original: &PropertyBag) -> PropertyBag {
    original
        .iter()
        .filter(|(key, _)| match key {
            PropertyKey::Text(_) => true,
            PropertyKey::Byte(_) | PropertyKey::Integer(_) => false,
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Removes every entry whose value is [`PropertyValue::Null`].
///
/// [`PropertyValue::Null`]: super::PropertyValue::Null
pub fn strip_keys_with_null_values(target: &mut PropertyBag) {
    let before = target.len();
    target.retain(|_, value| !value.is_null());

    let removed = before - target.len();
    if removed > 0 {
        tracing::debug!("Removed {} properties with null values", removed);
    }
}

/// Applies a property update the way peers do on receiving one.
///
/// String-keyed entries of `changes` are merged into `target`, then every
/// property set to null is deleted.
///
/// # Examples
///
/// ```
/// use netprops_common::{apply_property_changes, PropertyBag, PropertyKey, PropertyValue};
///
/// let mut room: PropertyBag = [("map", "docks"), ("mode", "ctf")].into_iter().collect();
/// let mut changes = PropertyBag::new();
/// changes.insert("mode", PropertyValue::Null);
/// changes.insert("round", 2);
///
/// apply_property_changes(&mut room, Some(&changes));
/// assert!(!room.contains_key(&PropertyKey::from("mode")));
/// assert_eq!(room.len(), 2);
/// ```
pub fn apply_property_changes(target: &mut PropertyBag, changes: Option<&PropertyBag>) {
    merge_string_keys(target, changes);
    strip_keys_with_null_values(target);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::PropertyValue;

    fn bag<K, V, const N: usize>(entries: [(K, V); N]) -> PropertyBag
    where
        K: Into<PropertyKey>,
        V: Into<PropertyValue>,
    {
        entries.into_iter().collect()
    }

    #[test]
    fn test_merge_overwrites_and_adds() {
        let mut target = bag([("a", 1)]);
        merge(&mut target, Some(&bag([("a", 2), ("b", 3)])));
        assert_eq!(target, bag([("a", 2), ("b", 3)]));
    }

    #[test]
    fn test_merge_keeps_target_only_keys() {
        let mut target = bag([("keep", 1)]);
        merge(&mut target, Some(&bag([(PropertyKey::Integer(5), 9)])));
        assert_eq!(target.len(), 2);
        assert_eq!(target.get(&"keep".into()), Some(&PropertyValue::Int(1)));
        assert_eq!(
            target.get(&PropertyKey::Integer(5)),
            Some(&PropertyValue::Int(9))
        );
    }

    #[test]
    fn test_merge_none_is_noop() {
        let mut target = bag([("a", 1)]);
        merge(&mut target, None);
        assert_eq!(target, bag([("a", 1)]));
    }

    #[test]
    fn test_merge_copies_null_values() {
        let mut target = bag([("a", 1)]);
        merge(&mut target, Some(&bag([("a", PropertyValue::Null)])));
        assert_eq!(target.get(&"a".into()), Some(&PropertyValue::Null));
    }

    #[test]
    fn test_merge_with_copy_of_self() {
        let mut target = bag([("a", 1), ("b", 2)]);
        let snapshot = target.clone();
        merge(&mut target, Some(&snapshot));
        assert_eq!(target, snapshot);
    }

    #[test]
    fn test_merge_string_keys_skips_numeric_keys() {
        let mut target = PropertyBag::new();
        let mut source = PropertyBag::new();
        source.insert(PropertyKey::Integer(1), "x");
        source.insert("k", "y");

        merge_string_keys(&mut target, Some(&source));
        assert_eq!(target, bag([("k", "y")]));
    }

    #[test]
    fn test_merge_string_keys_keeps_existing_numeric_keys() {
        let mut target = bag([(PropertyKey::Byte(255), "Ann")]);
        merge_string_keys(&mut target, Some(&bag([(PropertyKey::Byte(255), "Bob")])));
        assert_eq!(
            target.get(&PropertyKey::Byte(255)),
            Some(&PropertyValue::from("Ann"))
        );
    }

    #[test]
    fn test_merge_string_keys_none_is_noop() {
        let mut target = bag([("a", 1)]);
        merge_string_keys(&mut target, None);
        assert_eq!(target, bag([("a", 1)]));
    }

    #[test]
    fn test_strip_to_string_keys_leaves_original() {
        let mut original = PropertyBag::new();
        original.insert(PropertyKey::Integer(1), "a");
        original.insert("b", "c");

        let stripped = strip_to_string_keys(&original);
        assert_eq!(stripped, bag([("b", "c")]));
        assert_eq!(original.len(), 2);
        assert!(original.contains_key(&PropertyKey::Integer(1)));
    }

    #[test]
    fn test_strip_to_string_keys_does_not_recurse() {
        let nested = bag([(PropertyKey::Byte(1), 1)]);
        let original = bag([("nested", nested.clone())]);

        let stripped = strip_to_string_keys(&original);
        assert_eq!(stripped.get(&"nested".into()), Some(&PropertyValue::Bag(nested)));
    }

    #[test]
    fn test_strip_keys_with_null_values() {
        let mut target = PropertyBag::new();
        target.insert("a", 1);
        target.insert("b", PropertyValue::Null);
        target.insert("c", 3);

        strip_keys_with_null_values(&mut target);
        assert_eq!(target, bag([("a", 1), ("c", 3)]));
    }

    #[test]
    fn test_strip_keys_with_null_values_all_null() {
        let mut target = bag([
            (PropertyKey::Byte(1), PropertyValue::Null),
            (PropertyKey::from("x"), PropertyValue::Null),
        ]);
        strip_keys_with_null_values(&mut target);
        assert!(target.is_empty());
    }

    #[test]
    fn test_apply_property_changes() {
        let mut target = bag([("a", 1), ("b", 2)]);
        let mut changes = PropertyBag::new();
        changes.insert("b", PropertyValue::Null);
        changes.insert("c", 3);
        changes.insert(PropertyKey::Integer(7), 1);

        apply_property_changes(&mut target, Some(&changes));
        assert_eq!(target, bag([("a", 1), ("c", 3)]));
    }

    #[test]
    fn test_apply_property_changes_none_still_strips_nulls() {
        let mut target = bag([("a", PropertyValue::Null), ("b", PropertyValue::Int(2))]);
        apply_property_changes(&mut target, None);
        assert_eq!(target, bag([("b", 2)]));
    }
}
