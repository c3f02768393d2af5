//! HTTP controller endpoints for the holocron web API.
//!
//! Controllers extract path parameters and JSON bodies, delegate to the service layer, and
//! wrap results in the response DTOs. Each handler is annotated for the OpenAPI document.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;

use axum::extract::{
    path::ErrorKind,
    rejection::PathRejection,
    Path,
};

use crate::server::error::resource::ResourceError;

/// Unwraps extracted path IDs, rendering extraction failures in the JSON error format.
///
/// `kinds` names the record each path segment addresses, in route order. A segment that is an
/// integer too large for an ID cannot match any record, so it is reported as that record
/// missing. Any other unparsable segment is a 400.
pub(crate) fn path_ids<T>(
    path: Result<Path<T>, PathRejection>,
    kinds: &[&'static str],
) -> Result<T, ResourceError> {
    let rejection = match path {
        Ok(Path(ids)) => return Ok(ids),
        Err(rejection) => rejection,
    };

    if let PathRejection::FailedToDeserializePathParams(err) = &rejection {
        let segment = match err.kind() {
            ErrorKind::ParseErrorAtIndex { index, value, .. } => Some((*index, value)),
            ErrorKind::ParseErrorAtKey { key, value, .. } => {
                Some((usize::from(key != "id"), value))
            }
            ErrorKind::ParseError { value, .. } => Some((0, value)),
            _ => None,
        };

        if let Some((index, value)) = segment {
            if is_integer(value) {
                let kind = kinds.get(index).or(kinds.last()).copied().unwrap_or("Record");

                return Err(ResourceError::NotFound(kind));
            }
        }
    }

    Err(ResourceError::InvalidPath(rejection.body_text()))
}

fn is_integer(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);

    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
