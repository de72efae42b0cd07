//! Snapshot reader port

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a snapshot
#[derive(Error, Debug)]
pub enum ReadError {
    #[error("File does not exist: {}", .path.display())]
    Missing { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reads snapshot files as text
#[async_trait]
pub trait SnapshotReader: Send + Sync {
    async fn read(&self, path: &Path) -> Result<String, ReadError>;
}
