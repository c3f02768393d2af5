use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use utoipa::openapi::{path::Operation, OpenApi};

use crate::model::sitemap::{RouteDto, SitemapDto};

pub static SITEMAP_TAG: &str = "sitemap";

/// Routes served outside of the OpenAPI document
const EXTRA_ROUTES: [(&str, &str); 3] = [
    ("/", "GET"),
    ("/api/docs", "GET"),
    ("/api/docs/openapi.json", "GET"),
];

/// Collects every documented route of `api` into a sitemap sorted by path then method.
pub fn build_sitemap(api: &OpenApi) -> SitemapDto {
    let mut routes: Vec<RouteDto> = EXTRA_ROUTES
        .iter()
        .map(|(path, method)| RouteDto {
            path: path.to_string(),
            method: method.to_string(),
        })
        .collect();

    for (path, item) in api.paths.paths.iter() {
        let operations: [(&str, &Option<Operation>); 8] = [
            ("GET", &item.get),
            ("POST", &item.post),
            ("PUT", &item.put),
            ("PATCH", &item.patch),
            ("DELETE", &item.delete),
            ("HEAD", &item.head),
            ("OPTIONS", &item.options),
            ("TRACE", &item.trace),
        ];

        routes.extend(
            operations
                .into_iter()
                .filter(|(_, operation)| operation.is_some())
                .map(|(method, _)| RouteDto {
                    path: path.clone(),
                    method: method.to_string(),
                }),
        );
    }

    routes.sort();
    routes.dedup();

    SitemapDto { routes }
}

/// List every route the API answers
#[utoipa::path(
    get,
    path = "/",
    tag = SITEMAP_TAG,
    responses(
        (status = 200, description = "Every registered route", body = SitemapDto)
    ),
)]
pub async fn get_sitemap(Extension(sitemap): Extension<Arc<SitemapDto>>) -> impl IntoResponse {
    (StatusCode::OK, Json(sitemap.as_ref().clone()))
}
