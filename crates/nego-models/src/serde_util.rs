//! Serde helpers for partial-update payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize a field into `Option<Option<T>>` so that "omitted" and
/// "explicitly null" stay distinguishable:
/// - field missing        -> `None` (leave unchanged)
/// - field set to `null`  -> `Some(None)` (clear the value)
/// - field set to a value -> `Some(Some(value))`
///
/// Must be combined with `#[serde(default)]` on the field.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
