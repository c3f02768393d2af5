use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub url: String,
    /// Free-form descriptive attributes such as `gender` or `birth_year`
    pub attributes: BTreeMap<String, String>,
}

/// Body of `POST /characters`, `name` and `url` are required
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateCharacterDto {
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}
