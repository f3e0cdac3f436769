//! Lookup helpers for integer arrays received from the server.

/// Checks whether `value` occurs in `values`.
///
/// Handy for testing if an actor number is in a room's player list. A missing
/// array contains nothing.
///
/// # Examples
///
/// ```
/// use netprops_common::contains;
///
/// let actors = [1, 2, 3];
/// assert!(contains(Some(&actors[..]), 2));
/// assert!(!contains(Some(&actors[..]), 9));
/// assert!(!contains(None, 5));
/// ```
pub fn contains(values: Option<&[i32]>, value: i32) -> bool {
    values.is_some_and(|values| values.contains(&value))
}
