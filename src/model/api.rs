use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub message: String,
    /// HTTP status code, repeated from the response status line
    pub status_code: u16,
}

/// Confirmation returned by delete operations
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Confirmation returned by create operations, carrying the new record's ID
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatedDto {
    pub message: String,
    pub id: i32,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl CreatedDto {
    pub fn new(message: impl Into<String>, id: i32) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}
