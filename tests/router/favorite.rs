use super::*;

/// Expect a favorite for a missing user to be rejected without writing a row
#[tokio::test]
async fn favorite_planet_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_planet("Tatooine")
        .build()
        .await?;
    let app = app(&test);

    let (status, body) = send(
        &app,
        Method::POST,
        "/user/999/favorite_planets",
        Some(json!({ "planet_id": 1 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "User not found", "status_code": 404 }));
    let rows = entity::prelude::FavoritePlanet::find().all(&test.db).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Expect deleting a user to remove their favorites while leaving others intact
#[tokio::test]
async fn deleting_user_cascades_to_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke@tatooine.net")
        .with_user("leia@alderaan.gov")
        .with_character("Yoda")
        .with_planet("Dagobah")
        .build()
        .await?;
    let app = app(&test);

    for user_id in [1, 2] {
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/user/{user_id}/favorite_characters"),
            Some(json!({ "character_id": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, _) = send(
        &app,
        Method::POST,
        "/user/1/favorite_planets",
        Some(json!({ "planet_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::DELETE, "/user/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "User deleted" }));

    let characters = entity::prelude::FavoriteCharacter::find().all(&test.db).await?;
    let planets = entity::prelude::FavoritePlanet::find().all(&test.db).await?;
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].user_id, 2);
    assert!(planets.is_empty());

    let (status, _) = send(&app, Method::GET, "/user/1/favorite_characters", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a favorite to only be removable through its owner
#[tokio::test]
async fn favorite_is_scoped_to_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke@tatooine.net")
        .with_user("leia@alderaan.gov")
        .with_planet("Alderaan")
        .build()
        .await?;
    let app = app(&test);

    let (_, created) = send(
        &app,
        Method::POST,
        "/user/2/favorite_planets",
        Some(json!({ "planet_id": 1 })),
    )
    .await;
    let favorite_id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/user/1/favorite_planets/{favorite_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Favorite planet not found");

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/user/2/favorite_planets/{favorite_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, favorites) = send(&app, Method::GET, "/user/2/favorite_planets", None).await;
    assert_eq!(favorites, json!([]));

    Ok(())
}
