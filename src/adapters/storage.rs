use crate::core::Storage;
use crate::utils::error::{Result, SplitError};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at a base directory. Relative paths resolve
/// against the base; absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        fs::read(&full_path).map_err(|e| SplitError::read(full_path, e))
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| SplitError::write(parent, e))?;
        }

        fs::write(&full_path, data).map_err(|e| SplitError::write(full_path, e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let full_path = self.resolve(path);
        fs::create_dir_all(&full_path).map_err(|e| SplitError::write(full_path, e))
    }
}
