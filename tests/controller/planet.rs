use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::{
    model::planet::CreatePlanetDto,
    server::controller::planet::{create_planet, delete_planet, get_planet, get_planets},
};

use super::*;

#[tokio::test]
async fn create_planet_returns_id() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = create_planet(
        State(test.to_app_state()),
        Ok(Json(CreatePlanetDto {
            name: Some("Naboo".to_string()),
            url: Some("https://swapi.dev/api/planets/8/".to_string()),
            ..Default::default()
        })),
    )
    .await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Planet created!");
    assert_eq!(body["id"], 1);

    Ok(())
}

/// Expect whitespace-only text to count as missing
#[tokio::test]
async fn create_planet_with_blank_url_is_rejected() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = create_planet(
        State(test.to_app_state()),
        Ok(Json(CreatePlanetDto {
            name: Some("Naboo".to_string()),
            url: Some(" ".to_string()),
            ..Default::default()
        })),
    )
    .await;

    let (status, body) = into_json(result.into_response()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The 'url' cannot be empty");

    Ok(())
}

#[tokio::test]
async fn get_planets_and_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_planet("Bespin")
        .build()
        .await?;

    let list = get_planets(State(test.to_app_state())).await;
    let single = get_planet(State(test.to_app_state()), Ok(Path(1))).await;

    let (status, body) = into_json(list.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Bespin");
    let (status, body) = into_json(single.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["url"], "https://swapi.dev/api/planets/bespin");

    Ok(())
}

#[tokio::test]
async fn delete_planet_then_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_planet("Kamino")
        .build()
        .await?;

    let delete = delete_planet(State(test.to_app_state()), Ok(Path(1))).await;
    let get = get_planet(State(test.to_app_state()), Ok(Path(1))).await;

    let (status, body) = into_json(delete.into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Planet deleted");
    let (status, body) = into_json(get.into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Planet not found");

    Ok(())
}
