//! File copier port

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while copying a file
#[derive(Error, Debug)]
pub enum CopyError {
    #[error("Source file does not exist: {}", .path.display())]
    MissingSource { path: PathBuf },

    #[error("Failed to copy to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CopyError {
    /// Check if the copy failed because the source was absent
    pub fn is_missing_source(&self) -> bool {
        matches!(self, CopyError::MissingSource { .. })
    }
}

/// Copies one file over another
#[async_trait]
pub trait FileCopier: Send + Sync {
    /// Copy `source` to `dest`, replacing any existing file.
    ///
    /// Returns the number of bytes copied. When the source is missing the
    /// destination must be left untouched.
    async fn copy(&self, source: &Path, dest: &Path) -> Result<u64, CopyError>;
}
