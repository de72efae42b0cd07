//! Export API use case
//!
//! Copies the snapshot produced by `buildApi` to `public.api` in the project
//! directory, replacing whatever was there.

use crate::ports::file_copier::{CopyError, FileCopier};
use apisnap_domain::ExportApiTask;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while exporting the snapshot.
#[derive(Error, Debug)]
pub enum ExportApiError {
    /// The copy failed; the error names the offending path.
    #[error(transparent)]
    Copy(#[from] CopyError),
}

impl ExportApiError {
    /// Check if the snapshot had not been built yet
    pub fn is_missing_source(&self) -> bool {
        match self {
            ExportApiError::Copy(e) => e.is_missing_source(),
        }
    }
}

/// Output from the ExportApi use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportApiOutput {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub bytes: u64,
}

/// Use case for exporting the built snapshot.
pub struct ExportApiUseCase {
    copier: Arc<dyn FileCopier>,
}

impl ExportApiUseCase {
    pub fn new(copier: Arc<dyn FileCopier>) -> Self {
        Self { copier }
    }

    pub async fn execute(&self, task: &ExportApiTask) -> Result<ExportApiOutput, ExportApiError> {
        info!(
            "Exporting {} to {}",
            task.source().display(),
            task.dest().display()
        );
        let bytes = self.copier.copy(task.source(), task.dest()).await?;

        Ok(ExportApiOutput {
            source: task.source().to_path_buf(),
            dest: task.dest().to_path_buf(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::fakes::MemoryFs;
    use apisnap_domain::{BuildApiTask, Project};

    fn task() -> ExportApiTask {
        let project = Project::new("core", "1.0.0", "/repo").unwrap();
        ExportApiTask::from_build(&BuildApiTask::for_project(&project), &project)
    }

    #[tokio::test]
    async fn test_missing_source_leaves_dest_untouched() {
        let fs = MemoryFs::new();
        fs.write("/repo/public.api", "old");
        let use_case = ExportApiUseCase::new(fs.clone());

        let err = use_case.execute(&task()).await.unwrap_err();

        assert!(err.is_missing_source());
        assert!(err.to_string().contains("/repo/build/tmp/api/core.api"));
        assert_eq!(fs.get("/repo/public.api").as_deref(), Some("old"));
    }

    #[tokio::test]
    async fn test_missing_source_does_not_create_dest() {
        let fs = MemoryFs::new();
        let use_case = ExportApiUseCase::new(fs.clone());

        assert!(use_case.execute(&task()).await.is_err());
        assert!(fs.get("/repo/public.api").is_none());
    }

    #[tokio::test]
    async fn test_existing_dest_is_overwritten() {
        let fs = MemoryFs::new();
        let task = task();
        fs.write(task.source(), "new snapshot\n");
        fs.write(task.dest(), "a much longer previous snapshot\n");
        let use_case = ExportApiUseCase::new(fs.clone());

        let output = use_case.execute(&task).await.unwrap();

        assert_eq!(output.bytes, 13);
        assert_eq!(fs.get(task.dest()).as_deref(), Some("new snapshot\n"));
    }
}
