use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::favorite::{CreateFavoriteCharacterDto, CreateFavoritePlanetDto},
    server::controller::favorite::{
        add_favorite_character, add_favorite_planet, get_favorite_characters,
        get_favorite_planets, remove_favorite_character, remove_favorite_planet,
    },
};
use sea_orm::EntityTrait;

use super::*;

/// Expect the link to be listed under the user after adding it
#[tokio::test]
async fn add_then_list_favorite_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke@tatooine.net")
        .with_character("Yoda")
        .build()
        .await?;

    let add = add_favorite_character(
        State(test.to_app_state()),
        Ok(Path(1)),
        Ok(Json(CreateFavoriteCharacterDto {
            character_id: Some(1),
        })),
    )
    .await;

    let (status, body) = into_json(add.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Favorite character added!");

    let list = get_favorite_characters(State(test.to_app_state()), Ok(Path(1))).await;

    let (status, body) = into_json(list.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["user_id"], 1);
    assert_eq!(body[0]["character_id"], 1);

    Ok(())
}

/// Expect 404 and no link row when the user does not exist
#[tokio::test]
async fn add_favorite_planet_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_planet("Tatooine")
        .build()
        .await?;

    let result = add_favorite_planet(
        State(test.to_app_state()),
        Ok(Path(999)),
        Ok(Json(CreateFavoritePlanetDto { planet_id: Some(1) })),
    )
    .await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
    assert!(entity::prelude::FavoritePlanet::find().all(&test.db).await?.is_empty());

    Ok(())
}

/// Expect 404 when the referenced planet does not exist
#[tokio::test]
async fn add_favorite_planet_for_missing_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("leia@alderaan.gov")
        .build()
        .await?;

    let result = add_favorite_planet(
        State(test.to_app_state()),
        Ok(Path(1)),
        Ok(Json(CreateFavoritePlanetDto { planet_id: Some(2) })),
    )
    .await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Planet not found");

    Ok(())
}

/// Expect 400 when the body lacks the character ID
#[tokio::test]
async fn add_favorite_character_without_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke@tatooine.net")
        .build()
        .await?;

    let result = add_favorite_character(
        State(test.to_app_state()),
        Ok(Path(1)),
        Ok(Json(CreateFavoriteCharacterDto::default())),
    )
    .await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The 'character_id' cannot be empty");

    Ok(())
}

#[tokio::test]
async fn remove_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke@tatooine.net")
        .with_character("Yoda")
        .with_planet("Dagobah")
        .build()
        .await?;
    let character = test.favorite().insert_favorite_character(1, 1).await?;
    let planet = test.favorite().insert_favorite_planet(1, 1).await?;

    let character_result = remove_favorite_character(
        State(test.to_app_state()),
        Ok(Path((1, character.id))),
    )
    .await;
    let planet_result =
        remove_favorite_planet(State(test.to_app_state()), Ok(Path((1, planet.id)))).await;

    let (status, body) = into_json(character_result.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Favorite character deleted!");
    let (status, body) = into_json(planet_result.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Favorite planet deleted!");

    Ok(())
}

/// Expect 404 when removing a favorite that does not exist
#[tokio::test]
async fn remove_missing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("luke@tatooine.net")
        .build()
        .await?;

    let result =
        remove_favorite_character(State(test.to_app_state()), Ok(Path((1, 3)))).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Favorite character not found");

    Ok(())
}

#[tokio::test]
async fn list_favorite_planets_for_missing_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_favorite_planets(State(test.to_app_state()), Ok(Path(1))).await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status_code"], 404);

    Ok(())
}
