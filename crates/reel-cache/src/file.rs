use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::KvError;
use crate::kv::Kv;

/// Filesystem backend: one file per key under a root directory.
///
/// Missing files read as absent. Keys are used as file names directly;
/// callers own keeping them path-safe (the cache uses a single fixed
/// key).
pub struct FileKv {
    root: PathBuf,
}

impl FileKv {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, KvError> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| KvError::Backend(format!("create {}: {e}", root.display())))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl Kv for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KvError::Backend(format!("read {key}: {e}"))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
        write_atomic(&self.path_for(key), value)
            .map_err(|e| KvError::Backend(format!("write {key}: {e}")))
    }

    fn remove(&self, key: &str) -> Result<(), KvError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KvError::Backend(format!("remove {key}: {e}"))),
        }
    }
}

/// Write via a sibling temp file and rename, so a crashed write leaves
/// the previous blob intact.
fn write_atomic(path: &Path, value: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, value)?;
    std::fs::rename(&tmp, path)
}
