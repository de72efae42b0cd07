//! Check API use case
//!
//! Compares the snapshot produced by `buildApi` against the released
//! baseline and reports which lines were added or removed.

use crate::ports::snapshot_reader::{ReadError, SnapshotReader};
use apisnap_domain::{CheckApiTask, SnapshotDiff};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while checking the snapshot.
#[derive(Error, Debug)]
pub enum CheckApiError {
    #[error("No released API at {} (export one with `apisnap export` and commit it there)", .path.display())]
    MissingBaseline { path: PathBuf },

    #[error("No API snapshot at {} (run buildApi first)", .path.display())]
    MissingSnapshot { path: PathBuf },

    #[error(transparent)]
    Read(ReadError),
}

/// Output from the CheckApi use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckApiOutput {
    pub baseline: PathBuf,
    pub actual: PathBuf,
    pub diff: SnapshotDiff,
}

impl CheckApiOutput {
    /// True when the snapshot matches the baseline.
    pub fn is_compatible(&self) -> bool {
        self.diff.is_empty()
    }
}

/// Use case for comparing a snapshot with its baseline.
pub struct CheckApiUseCase {
    reader: Arc<dyn SnapshotReader>,
}

impl CheckApiUseCase {
    pub fn new(reader: Arc<dyn SnapshotReader>) -> Self {
        Self { reader }
    }

    pub async fn execute(&self, task: &CheckApiTask) -> Result<CheckApiOutput, CheckApiError> {
        let actual = self.reader.read(task.actual()).await.map_err(|e| match e {
            ReadError::Missing { path } => CheckApiError::MissingSnapshot { path },
            other => CheckApiError::Read(other),
        })?;
        let baseline = self.reader.read(task.baseline()).await.map_err(|e| match e {
            ReadError::Missing { path } => CheckApiError::MissingBaseline { path },
            other => CheckApiError::Read(other),
        })?;

        let diff = SnapshotDiff::between(&baseline, &actual);
        if diff.is_empty() {
            info!("API matches {}", task.baseline().display());
        } else {
            warn!(
                "API differs from {}: {} removed, {} added",
                task.baseline().display(),
                diff.removed.len(),
                diff.added.len()
            );
        }

        Ok(CheckApiOutput {
            baseline: task.baseline().to_path_buf(),
            actual: task.actual().to_path_buf(),
            diff,
        })
    }
}
