//! Snapshot settings

use crate::project::Project;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Conventional baseline location: `<root>/api/<version>.api`.
pub fn default_api_file(root_dir: &Path, version: &str) -> PathBuf {
    root_dir.join("api").join(format!("{version}.api"))
}

/// Settings for the snapshot tasks, passed explicitly to
/// [`ApiSnapshotPlugin::apply`](super::plugin::ApiSnapshotPlugin::apply).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotSettings {
    api_file: PathBuf,
}

impl SnapshotSettings {
    /// Settings using the conventional baseline for `project`.
    pub fn for_project(project: &Project) -> Self {
        Self {
            api_file: default_api_file(&project.root_dir, &project.version),
        }
    }

    /// Replaces the baseline location.
    pub fn with_api_file(mut self, api_file: impl Into<PathBuf>) -> Self {
        self.api_file = api_file.into();
        self
    }

    /// The file holding the publicly released API.
    pub fn api_file(&self) -> &Path {
        &self.api_file
    }
}
