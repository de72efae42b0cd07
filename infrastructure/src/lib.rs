//! Infrastructure layer for apisnap
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod extractor;
pub mod fs;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileApiConfig, FileConfig, FileProjectConfig, FileRequestConfig,
    Severity,
};
pub use extractor::CommandApiExtractor;
pub use fs::LocalSnapshotFiles;
