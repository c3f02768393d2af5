//! Errors reported to API clients.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ResourceError {
    /// A required body field is absent, null, or blank.
    #[error("The '{0}' cannot be empty")]
    MissingField(&'static str),
    /// The request body is not JSON or a field has the wrong type.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// A path segment that should be a record ID is not an integer.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
    /// The record addressed by the request does not exist, holds the record kind.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Email {0:?} is already registered")]
    EmailTaken(String),
}

impl ResourceError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::InvalidBody(_) | Self::InvalidPath(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::EmailTaken(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(self.status(), self.to_string())
    }
}

impl From<JsonRejection> for ResourceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}
