//! Error types for the holocron server.
//!
//! Errors are split by domain (configuration, API resources) and aggregated into the
//! top-level [`Error`]. Every error type implements `IntoResponse`, rendering the single
//! JSON error contract `{ "message": ..., "status_code": ... }` used by all endpoints.

pub mod config;
pub mod resource;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, resource::ResourceError},
};

/// Main error type for the holocron server.
///
/// Aggregates domain-specific errors and external library errors so handlers, services and
/// startup code can all use `?`. Only [`ResourceError`] is meant to reach API clients
/// verbatim, everything else is rendered as a generic 500.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Client-facing API error (validation, missing records, conflicts).
    #[error(transparent)]
    ResourceError(#[from] ResourceError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failed to encode or decode a JSON column.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
    /// Listener bind or serve failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ResourceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the JSON error response shared by every error type.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            message: message.into(),
            status_code: status.as_u16(),
        }),
    )
        .into_response()
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message, so database
/// details never leak into responses.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
