use serde::{Deserialize, Serialize};

/// Link between a user and one of their favorite characters
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteCharacterDto {
    pub id: i32,
    pub user_id: i32,
    pub character_id: i32,
}

/// Link between a user and one of their favorite planets
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritePlanetDto {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: i32,
}

/// Body of `POST /user/{id}/favorite_characters`
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateFavoriteCharacterDto {
    pub character_id: Option<i32>,
}

/// Body of `POST /user/{id}/favorite_planets`
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateFavoritePlanetDto {
    pub planet_id: Option<i32>,
}
