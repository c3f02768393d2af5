//! Required-field checks applied to request bodies before anything is persisted.

use crate::server::error::resource::ResourceError;

/// Returns the value of a required text field.
///
/// A field that is absent, null, or only whitespace counts as missing.
pub fn require_text(field: &'static str, value: Option<String>) -> Result<String, ResourceError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ResourceError::MissingField(field)),
    }
}

/// Returns the value of a required non-text field.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, ResourceError> {
    value.ok_or(ResourceError::MissingField(field))
}
