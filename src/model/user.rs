use serde::{Deserialize, Serialize};

/// A user as returned by the API, the password is never serialized
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
}

/// Body of `POST /user`
///
/// Every field is required; they are optional here so that a missing field is
/// reported by name instead of as a generic deserialization failure.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}
