mod cache;
mod error;
mod kv;

pub use cache::CacheStore;
pub use error::{CacheError, KvError};
pub use kv::Kv;

#[cfg(feature = "memory")]
mod memory;

#[cfg(feature = "memory")]
pub use memory::MemoryKv;

#[cfg(feature = "file")]
mod file;

#[cfg(feature = "file")]
pub use file::FileKv;
