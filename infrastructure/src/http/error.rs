//! Mapping transport failures into [`CatalogError`]

use super::wire::ErrorBody;
use petmatch_application::CatalogError;

/// Map a non-2xx status and its body to a catalog error
pub fn map_status(status: u16, body: &str) -> CatalogError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message())
        .unwrap_or_else(|_| body.trim().to_string());

    match status {
        409 => CatalogError::Conflict(message),
        404 => CatalogError::NotFound(message),
        _ => CatalogError::Status { status, message },
    }
}

/// Classify a reqwest failure
pub fn from_reqwest(e: reqwest::Error) -> CatalogError {
    if e.is_timeout() {
        CatalogError::Timeout
    } else if e.is_decode() {
        CatalogError::Decode(e.to_string())
    } else if let Some(status) = e.status() {
        CatalogError::Status {
            status: status.as_u16(),
            message: e.to_string(),
        }
    } else {
        CatalogError::Transport(e.to_string())
    }
}
