use super::*;

/// Expect a user created without a password field to be rejected and not listed
#[tokio::test]
async fn create_user_without_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        Method::POST,
        "/user",
        Some(json!({ "email": "a@b.com", "is_active": true })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "The 'password' cannot be empty", "status_code": 400 }));

    let (_, users) = send(&app, Method::GET, "/user", None).await;
    assert_eq!(users, json!([]));

    Ok(())
}

/// Expect a malformed body to be reported as 400 in the shared error shape
#[tokio::test]
async fn malformed_body_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = app(&test);

    let (status, body) = send_raw(&app, Method::POST, "/characters", "{ not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status_code"], 400);
    assert!(body["message"].is_string());

    Ok(())
}

/// Expect a wrongly typed field to be reported as 400
#[tokio::test]
async fn wrongly_typed_field_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        Method::POST,
        "/user",
        Some(json!({ "email": "a@b.com", "password": "x", "is_active": "yes" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status_code"], 400);

    Ok(())
}

/// Expect a character to be retrievable after creation and gone after deletion
#[tokio::test]
async fn character_lifecycle() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = app(&test);

    let (status, created) = send(
        &app,
        Method::POST,
        "/characters",
        Some(json!({
            "name": "Luke Skywalker",
            "url": "https://swapi.dev/api/people/1/",
            "attributes": { "gender": "male" }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().unwrap();

    let (status, character) = send(&app, Method::GET, &format!("/characters/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        character,
        json!({
            "id": id,
            "name": "Luke Skywalker",
            "url": "https://swapi.dev/api/people/1/",
            "attributes": { "gender": "male" }
        })
    );

    let (status, body) = send(&app, Method::DELETE, &format!("/characters/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Character deleted" }));

    let (status, body) = send(&app, Method::GET, &format!("/characters/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Character not found", "status_code": 404 }));

    Ok(())
}

/// Expect unknown top-level keys to be ignored
#[tokio::test]
async fn unknown_keys_are_ignored() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = app(&test);

    let (status, _) = send(
        &app,
        Method::POST,
        "/planets",
        Some(json!({
            "name": "Hoth",
            "url": "https://swapi.dev/api/planets/4/",
            "climate": "frozen"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, planets) = send(&app, Method::GET, "/planets", None).await;
    assert_eq!(planets[0]["name"], "Hoth");
    assert_eq!(planets[0]["attributes"], json!({}));

    Ok(())
}

/// Expect a user to be readable then gone after deletion
#[tokio::test]
async fn user_lifecycle() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = app(&test);

    let (status, created) = send(
        &app,
        Method::POST,
        "/user",
        Some(json!({ "email": "a@b.com", "password": "x", "is_active": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["message"], "User created!");
    let id = created["id"].as_i64().unwrap();

    let (status, user) = send(&app, Method::GET, &format!("/user/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user, json!({ "id": id, "email": "a@b.com", "is_active": true }));

    let (status, _) = send(&app, Method::DELETE, &format!("/user/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &format!("/user/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect non-string attribute values to be rejected without writing a row
#[tokio::test]
async fn non_string_attribute_is_bad_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        Method::POST,
        "/characters",
        Some(json!({
            "name": "Luke Skywalker",
            "url": "https://swapi.dev/api/people/1/",
            "attributes": { "height": 172 }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status_code"], 400);

    let (_, characters) = send(&app, Method::GET, "/characters", None).await;
    assert_eq!(characters, json!([]));

    Ok(())
}
