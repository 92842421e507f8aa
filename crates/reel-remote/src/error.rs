use std::fmt;

/// Any remote failure triggers the caller's local fallback; the variants
/// exist for diagnostics, not for branching.
#[derive(Debug)]
pub enum RemoteError {
    Transport(String),
    Status(u16, String),
    Decode(String),
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteError::Transport(msg) => write!(f, "transport error: {msg}"),
            RemoteError::Status(code, url) => write!(f, "server returned {code} for {url}"),
            RemoteError::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for RemoteError {}

impl RemoteError {
    pub fn status_code(&self) -> Option<http::StatusCode> {
        match self {
            RemoteError::Status(code, _) => http::StatusCode::from_u16(*code).ok(),
            _ => None,
        }
    }
}
