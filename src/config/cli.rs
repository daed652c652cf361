use crate::core::Storage;
use crate::utils::error::{Result, StripError};
use std::fs;
use std::path::Path;

/// Reads and overwrites files directly on disk. Each call opens and closes
/// its own handle; a failed write can leave a truncated file.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_text(&self, path: &Path) -> Result<String> {
        let data = fs::read(path)?;
        String::from_utf8(data).map_err(|source| StripError::DecodeError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)?;
        Ok(())
    }
}
