use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{CreatedDto, ErrorDto, MessageDto},
        favorite::{
            CreateFavoriteCharacterDto, CreateFavoritePlanetDto, FavoriteCharacterDto,
            FavoritePlanetDto,
        },
    },
    server::{
        controller::path_ids,
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// List a user's favorite characters
#[utoipa::path(
    get,
    path = "/user/{id}/favorite_characters",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Favorite character links of the user", body = Vec<FavoriteCharacterDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorite_characters(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = path_ids(path, &["User"])?;

    let favorites = FavoriteService::new(&state.db)
        .get_favorite_characters(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a character to a user's favorites
///
/// # Responses
/// - 200 (OK): Favorite added, body carries the new link ID
/// - 400 (Bad Request): Body is not valid JSON or `character_id` is missing
/// - 404 (Not Found): The user or the character does not exist
#[utoipa::path(
    post,
    path = "/user/{id}/favorite_characters",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = CreateFavoriteCharacterDto,
    responses(
        (status = 200, description = "Favorite character added", body = CreatedDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 404, description = "User or character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateFavoriteCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = path_ids(path, &["User"])?;

    let Json(payload) = payload.map_err(ResourceError::from)?;

    let favorite = FavoriteService::new(&state.db)
        .add_favorite_character(user_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(CreatedDto::new("Favorite character added!", favorite.id)),
    ))
}

/// Remove a character from a user's favorites
#[utoipa::path(
    delete,
    path = "/user/{id}/favorite_characters/{favorite_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("favorite_id" = i32, Path, description = "Favorite character link ID")
    ),
    responses(
        (status = 200, description = "Favorite character deleted", body = MessageDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let (user_id, favorite_id) = path_ids(path, &["User", "Favorite character"])?;

    FavoriteService::new(&state.db)
        .remove_favorite_character(user_id, favorite_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Favorite character deleted!")),
    ))
}

/// List a user's favorite planets
#[utoipa::path(
    get,
    path = "/user/{id}/favorite_planets",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Favorite planet links of the user", body = Vec<FavoritePlanetDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorite_planets(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = path_ids(path, &["User"])?;

    let favorites = FavoriteService::new(&state.db)
        .get_favorite_planets(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/user/{id}/favorite_planets",
    tag = FAVORITE_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = CreateFavoritePlanetDto,
    responses(
        (status = 200, description = "Favorite planet added", body = CreatedDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<CreateFavoritePlanetDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = path_ids(path, &["User"])?;

    let Json(payload) = payload.map_err(ResourceError::from)?;

    let favorite = FavoriteService::new(&state.db)
        .add_favorite_planet(user_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(CreatedDto::new("Favorite planet added!", favorite.id)),
    ))
}

#[utoipa::path(
    delete,
    path = "/user/{id}/favorite_planets/{favorite_id}",
    tag = FAVORITE_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("favorite_id" = i32, Path, description = "Favorite planet link ID")
    ),
    responses(
        (status = 200, description = "Favorite planet deleted", body = MessageDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let (user_id, favorite_id) = path_ids(path, &["User", "Favorite planet"])?;

    FavoriteService::new(&state.db)
        .remove_favorite_planet(user_id, favorite_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Favorite planet deleted!")),
    ))
}
