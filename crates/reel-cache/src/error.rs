use std::fmt;

#[derive(Debug)]
pub enum KvError {
    Backend(String),
}

impl fmt::Display for KvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KvError::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl std::error::Error for KvError {}

#[derive(Debug)]
pub enum CacheError {
    Kv(KvError),
    Codec(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::Kv(e) => write!(f, "kv error: {e}"),
            CacheError::Codec(msg) => write!(f, "codec error: {msg}"),
        }
    }
}

impl std::error::Error for CacheError {}

impl From<KvError> for CacheError {
    fn from(e: KvError) -> Self {
        CacheError::Kv(e)
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(e: serde_json::Error) -> Self {
        CacheError::Codec(e.to_string())
    }
}
