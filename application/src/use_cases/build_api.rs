//! Build API use case
//!
//! Runs the [`ApiExtractor`] over the release classes of a project and
//! reports where the snapshot was written. The snapshot itself is never
//! inspected: whatever the extractor writes is the result.

use crate::ports::api_extractor::{ApiExtractor, ExtractorError};
use apisnap_domain::BuildApiTask;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building the snapshot.
#[derive(Error, Debug)]
pub enum BuildApiError {
    /// The extractor rejected its inputs. Surfaced unchanged.
    #[error(transparent)]
    Extraction(#[from] ExtractorError),
}

/// Output from the BuildApi use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildApiOutput {
    /// The generated snapshot, equal to [`BuildApiTask::output_file`].
    pub api_file: PathBuf,
}

/// Use case for generating a fresh API snapshot.
pub struct BuildApiUseCase {
    extractor: Arc<dyn ApiExtractor>,
}

impl BuildApiUseCase {
    pub fn new(extractor: Arc<dyn ApiExtractor>) -> Self {
        Self { extractor }
    }

    /// Invokes the extractor once. No retry is attempted on failure.
    pub async fn execute(&self, task: &BuildApiTask) -> Result<BuildApiOutput, BuildApiError> {
        let api_file = task.output_file();
        info!(
            "Building API snapshot for {} from {} classes dir(s)",
            task.project_name,
            task.input_classes_dirs.len()
        );
        debug!("Snapshot output: {}", api_file.display());

        self.extractor
            .extract(
                &task.input_classes_dirs,
                &task.input_dependencies,
                &api_file,
            )
            .await?;

        Ok(BuildApiOutput { api_file })
    }
}
