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
        character::{CharacterDto, CreateCharacterDto},
    },
    server::{
        controller::path_ids,
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::character::CharacterService,
    },
};

pub static CHARACTER_TAG: &str = "character";

/// List all characters
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CharacterService::new(&state.db).get_characters().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Create a character
///
/// # Responses
/// - 200 (OK): Character created, body carries the new ID
/// - 400 (Bad Request): Body is not valid JSON or `name` or `url` is missing
#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 200, description = "Character created", body = CreatedDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(ResourceError::from)?;

    let character = CharacterService::new(&state.db)
        .create_character(payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(CreatedDto::new("Character created!", character.id)),
    ))
}

#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "The character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let character_id = path_ids(path, &["Character"])?;

    let character = CharacterService::new(&state.db)
        .get_character(character_id)
        .await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Delete a character, removing it from every user's favorites
#[utoipa::path(
    delete,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character deleted", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let character_id = path_ids(path, &["Character"])?;

    CharacterService::new(&state.db)
        .delete_character(character_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Character deleted"))))
}
