use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::deserialize_some;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegionDto {
    /// Three letter National Olympic Committee code.
    #[serde(rename = "NOC")]
    pub noc: String,
    pub region: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateRegionDto {
    #[serde(rename = "NOC")]
    pub noc: String,
    pub region: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update for a region. Absent fields are left unchanged; `notes: null`
/// clears the notes while `null` on `NOC` or `region` is rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateRegionDto {
    /// Accepted only when equal to the code in the path; the code cannot change.
    #[serde(rename = "NOC", default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub noc: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub region: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}
