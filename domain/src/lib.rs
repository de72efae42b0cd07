//! Domain layer for apisnap
//!
//! This crate contains the value objects and task descriptors shared by
//! every other layer. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Request options
//!
//! [`RequestOptions`] is the immutable set of per-request knobs handed to an
//! API client: timeout, API version tag and the auto-function switch.
//!
//! ## API snapshots
//!
//! - **buildApi**: runs an external extractor over the compiled output and
//!   writes `<name>.api` into a temporary directory
//! - **exportApi**: copies that file to `public.api` in the project directory
//! - **checkApi**: compares that file against the committed baseline

pub mod config;
pub mod core;
pub mod project;
pub mod request;
pub mod snapshot;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use project::Project;
pub use request::RequestOptions;
pub use snapshot::{
    diff::SnapshotDiff,
    plugin::{ApiSnapshotPlugin, ApiTasks},
    settings::{SnapshotSettings, default_api_file},
    task::{BuildApiTask, CheckApiTask, ExportApiTask, PUBLIC_API_FILE, TaskName},
};
