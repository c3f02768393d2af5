use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::user::CreateUserDto,
    server::controller::user::{create_user, delete_user, get_user, get_users},
};
use sea_orm::EntityTrait;

use super::*;

fn user_payload(email: &str) -> CreateUserDto {
    CreateUserDto {
        email: Some(email.to_string()),
        password: Some("x".to_string()),
        is_active: Some(true),
    }
}

/// Expect 200 with the new ID and a persisted user
#[tokio::test]
async fn create_user_returns_id() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = create_user(
        State(test.to_app_state()),
        Ok(Json(user_payload("luke@tatooine.net"))),
    )
    .await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User created!");
    let id = body["id"].as_i64().unwrap() as i32;
    let user = entity::prelude::User::find_by_id(id).one(&test.db).await?;
    assert_eq!(user.unwrap().email, "luke@tatooine.net");

    Ok(())
}

/// Expect 400 naming the missing password and no user written
#[tokio::test]
async fn create_user_without_password_is_rejected() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = create_user(
        State(test.to_app_state()),
        Ok(Json(CreateUserDto {
            password: None,
            ..user_payload("a@b.com")
        })),
    )
    .await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The 'password' cannot be empty");
    assert_eq!(body["status_code"], 400);
    assert!(entity::prelude::User::find().all(&test.db).await?.is_empty());

    Ok(())
}

/// Expect 409 when registering an email twice
#[tokio::test]
async fn create_user_with_taken_email_conflicts() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("a@b.com")
        .build()
        .await?;

    let result = create_user(State(test.to_app_state()), Ok(Json(user_payload("a@b.com")))).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status_code"], 409);

    Ok(())
}

/// Expect the password to never appear in listed users
#[tokio::test]
async fn get_users_omits_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke@tatooine.net")
        .with_user("leia@alderaan.gov")
        .build()
        .await?;

    let result = get_users(State(test.to_app_state())).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[1]["email"], "leia@alderaan.gov");
    assert!(users.iter().all(|u| u.get("password").is_none()));

    Ok(())
}

#[tokio::test]
async fn get_user_returns_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let user = test
        .user()
        .insert_user_with("han@falcon.io", "x", false)
        .await?;

    let result = get_user(State(test.to_app_state()), Ok(Path(user.id))).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user.id);
    assert_eq!(body["email"], "han@falcon.io");
    assert_eq!(body["is_active"], false);

    Ok(())
}

/// Expect 404 with the shared error body for a missing user
#[tokio::test]
async fn get_user_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_user(State(test.to_app_state()), Ok(Path(42))).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
    assert_eq!(body["status_code"], 404);

    Ok(())
}

#[tokio::test]
async fn delete_user_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke@tatooine.net")
        .build()
        .await?;

    let first = delete_user(State(test.to_app_state()), Ok(Path(1))).await;
    let second = delete_user(State(test.to_app_state()), Ok(Path(1))).await;

    let (status, body) = into_json(first.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User deleted");
    let (status, _) = into_json(second.into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a 500 with a generic message when the database is unusable
#[tokio::test]
async fn get_users_database_error_is_hidden() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_users(State(test.to_app_state())).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["status_code"], 500);

    Ok(())
}
