use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::KvError;
use crate::kv::Kv;

/// In-memory backend. Lock poisoning is reported as a backend error
/// rather than panicking through the caller.
#[derive(Default)]
pub struct MemoryKv {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Kv for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| KvError::Backend(format!("lock poisoned: {e}")))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| KvError::Backend(format!("lock poisoned: {e}")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| KvError::Backend(format!("lock poisoned: {e}")))?;
        entries.remove(key);
        Ok(())
    }
}
