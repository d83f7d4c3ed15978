use serde::{Deserialize, Deserializer};

/// Keeps "absent" and "explicit null" apart for partial updates: a missing field stays `None`
/// (with `#[serde(default)]`), `null` becomes `Some(None)`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
