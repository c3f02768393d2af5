use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub url: String,
    /// Free-form descriptive attributes such as `climate` or `terrain`
    pub attributes: BTreeMap<String, String>,
}

/// Body of `POST /planets`, `name` and `url` are required
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePlanetDto {
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}
