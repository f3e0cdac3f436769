//! Common helpers shared by the networked game client and its plugins.
//!
//! This crate provides small, stateless utilities that sit next to the
//! networking layer:
//! - Approximate equality for vectors, rotations and floats
//! - Property-bag merging and stripping (custom room/player properties)
//! - A type-annotated debug dump for property bags
//! - Membership checks on optional integer arrays (e.g. actor numbers)
//!
//! # Design Principles
//!
//! - **Pure functions only** - no I/O, no global state, no locks
//! - **Minimal dependencies** - serde, thiserror and tracing
//! - **Tagged types** - property keys and values are explicit enums, so
//!   filtering by key type is an exhaustive match

pub mod approx;
pub mod collections;
pub mod error;
pub mod math;
pub mod properties;

// Re-export commonly used items at crate root for convenience
pub use approx::{almost_equals, AlmostEquals, SyncTolerances};
pub use collections::contains;
pub use error::PropertyError;
pub use math::{Quaternion, Vec2, Vec3};
pub use properties::{
    apply_property_changes, merge, merge_string_keys, strip_keys_with_null_values,
    strip_to_string_keys, to_string_full, PropertyBag, PropertyKey, PropertyValue,
};
