use std::fmt;

use reel_cache::CacheError;
use reel_remote::RemoteError;

/// Failures surfaced to the presentation layer. A `Remote` variant only
/// escapes when every local fallback has been exhausted.
#[derive(Debug)]
pub enum CatalogError {
    Remote(RemoteError),
    Cache(CacheError),
    NotFound(String),
    Validation(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Remote(e) => write!(f, "remote error: {e}"),
            CatalogError::Cache(e) => write!(f, "cache error: {e}"),
            CatalogError::NotFound(what) => write!(f, "not found: {what}"),
            CatalogError::Validation(msg) => write!(f, "invalid request: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl CatalogError {
    pub fn status_code(&self) -> http::StatusCode {
        match self {
            CatalogError::NotFound(_) => http::StatusCode::NOT_FOUND,
            CatalogError::Validation(_) => http::StatusCode::BAD_REQUEST,
            CatalogError::Remote(_) | CatalogError::Cache(_) => {
                http::StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<RemoteError> for CatalogError {
    fn from(e: RemoteError) -> Self {
        CatalogError::Remote(e)
    }
}

impl From<CacheError> for CatalogError {
    fn from(e: CacheError) -> Self {
        CatalogError::Cache(e)
    }
}
