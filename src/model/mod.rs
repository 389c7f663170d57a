//! JSON data transfer objects shared by the HTTP layer.
//!
//! These types define the wire format of the API. Field names follow the
//! established paralympics JSON format (`NOC`, `type`, ...), which is why several
//! fields carry serde renames.

pub mod api;
pub mod event;
pub mod region;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserializes a present field into `Some`, keeping an explicit JSON `null` as `Some(None)`.
///
/// Combined with `#[serde(default)]` this lets patch payloads tell an absent field
/// (`None`) apart from a field being cleared (`Some(None)`).
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
