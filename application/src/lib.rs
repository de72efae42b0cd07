//! Application layer for apisnap
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    api_extractor::{ApiExtractor, ExtractorError},
    file_copier::{CopyError, FileCopier},
    progress::{NoProgress, TaskProgressNotifier},
    snapshot_reader::{ReadError, SnapshotReader},
};
pub use use_cases::build_api::{BuildApiError, BuildApiOutput, BuildApiUseCase};
pub use use_cases::check_api::{CheckApiError, CheckApiOutput, CheckApiUseCase};
pub use use_cases::export_api::{ExportApiError, ExportApiOutput, ExportApiUseCase};
pub use use_cases::run_tasks::{RunTasksError, RunTasksOutput, RunTasksUseCase};
