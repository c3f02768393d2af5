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
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::path_ids,
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// List all users
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All registered users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Register a new user
///
/// # Responses
/// - 200 (OK): User created, body carries the new ID
/// - 400 (Bad Request): Body is not valid JSON or `email`, `password` or `is_active` is missing
/// - 409 (Conflict): Email is already registered
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = CreatedDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(ResourceError::from)?;

    let user = UserService::new(&state.db).create_user(payload).await?;

    Ok((StatusCode::OK, Json(CreatedDto::new("User created!", user.id))))
}

/// Get a single user
#[utoipa::path(
    get,
    path = "/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = path_ids(path, &["User"])?;

    let user = UserService::new(&state.db).get_user(user_id).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Delete a user and all of their favorites
#[utoipa::path(
    delete,
    path = "/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let user_id = path_ids(path, &["User"])?;

    UserService::new(&state.db).delete_user(user_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted"))))
}
