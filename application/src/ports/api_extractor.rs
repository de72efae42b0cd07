//! API extractor port
//!
//! Defines the interface for the external tool that scans compiled output
//! and writes a description of its public API.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while running the extractor
#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("API extractor '{program}' not found on PATH")]
    NotFound { program: String },

    #[error("Failed to start API extractor '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("API extractor exited with {status} while writing {}: {stderr}", .output.display())]
    Failed {
        status: String,
        output: PathBuf,
        stderr: String,
    },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to remove previous snapshot {}: {source}", .path.display())]
    StaleOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Extractor of public API snapshots
///
/// Implementations write the snapshot to `output_file`; its contents are
/// opaque to the application layer. On error no file is left at
/// `output_file`, including one from an earlier run.
#[async_trait]
pub trait ApiExtractor: Send + Sync {
    async fn extract(
        &self,
        classes_dirs: &[PathBuf],
        dependencies: &[PathBuf],
        output_file: &Path,
    ) -> Result<(), ExtractorError>;
}
