//! Snapshot configuration from TOML (`[api]` section)

use apisnap_domain::{Project, SnapshotSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extractor program used when none is configured.
pub const DEFAULT_EXTRACTOR: &str = "api-extractor";

/// Raw snapshot configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Baseline override; relative paths resolve against the root directory
    pub api_file: Option<PathBuf>,
    /// Extractor program (name on PATH or path)
    pub extractor: String,
    /// Arguments placed before the generated ones
    pub extractor_args: Vec<String>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            api_file: None,
            extractor: DEFAULT_EXTRACTOR.to_string(),
            extractor_args: Vec::new(),
        }
    }
}

impl FileApiConfig {
    pub fn to_settings(&self, project: &Project) -> SnapshotSettings {
        let settings = SnapshotSettings::for_project(project);
        match &self.api_file {
            Some(path) => settings.with_api_file(project.root_file(path)),
            None => settings,
        }
    }
}
