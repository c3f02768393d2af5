//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here through utoipa so the OpenAPI document, the
//! Swagger UI at `/api/docs`, and the sitemap at `/` are all derived from the same routes.

use std::sync::Arc;

use axum::{Extension, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Holocron", description = "Star Wars characters, planets and user favorites"),
    tags(
        (name = controller::user::USER_TAG, description = "User accounts"),
        (name = controller::character::CHARACTER_TAG, description = "Star Wars characters"),
        (name = controller::planet::PLANET_TAG, description = "Star Wars planets"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite characters and planets of a user"),
        (name = controller::sitemap::SITEMAP_TAG, description = "Route listing"),
    )
)]
struct ApiDoc;

/// Builds the application's HTTP router with all API endpoints, the sitemap and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /` - Sitemap of every route
/// - `GET, POST /user` and `GET, DELETE /user/{id}`
/// - `GET, POST /characters` and `GET, DELETE /characters/{id}`
/// - `GET, POST /planets` and `GET, DELETE /planets/{id}`
/// - `GET, POST /user/{id}/favorite_characters` and `DELETE /user/{id}/favorite_characters/{favorite_id}`
/// - `GET, POST /user/{id}/favorite_planets` and `DELETE /user/{id}/favorite_planets/{favorite_id}`
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db });
/// ```
pub fn routes() -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::character::get_characters,
            controller::character::create_character
        ))
        .routes(routes!(
            controller::character::get_character,
            controller::character::delete_character
        ))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::favorite::get_favorite_characters,
            controller::favorite::add_favorite_character
        ))
        .routes(routes!(controller::favorite::remove_favorite_character))
        .routes(routes!(
            controller::favorite::get_favorite_planets,
            controller::favorite::add_favorite_planet
        ))
        .routes(routes!(controller::favorite::remove_favorite_planet))
        .routes(routes!(controller::sitemap::get_sitemap))
        .split_for_parts();

    let sitemap = Arc::new(controller::sitemap::build_sitemap(&api));

    routes
        .layer(Extension(sitemap))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
