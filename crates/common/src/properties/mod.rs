//! Property bags exchanged between networked peers.
//!
//! A property bag maps [`PropertyKey`]s to [`PropertyValue`]s. Numeric keys
//! are reserved protocol codes, string keys are custom game properties, and a
//! [`PropertyValue::Null`] value asks peers to delete that property.

mod bag;
mod debug;
mod key;
mod ops;
mod value;

pub use bag::{PropertyBag, PropertyEntry};
pub use debug::to_string_full;
pub use key::PropertyKey;
pub use ops::{
    apply_property_changes, merge, merge_string_keys, strip_keys_with_null_values,
    strip_to_string_keys,
};
pub use value::PropertyValue;
