//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types on demand.

mod api;
mod project;
mod request;

pub use api::FileApiConfig;
pub use project::FileProjectConfig;
pub use request::FileRequestConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Project layout
    pub project: FileProjectConfig,
    /// Snapshot settings and extractor command
    pub api: FileApiConfig,
    /// Request options for API clients
    pub request: FileRequestConfig,
}

/// How serious a configuration issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem detected in an otherwise loadable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key path (e.g. `"project.version"`).
    pub field: String,
    pub message: String,
}

impl ConfigIssue {
    fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues never prevent loading; callers decide whether to stop on
    /// [`Severity::Error`].
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.project.name.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "project.name",
                "project.name is empty; the snapshot file would have no name",
            ));
        }
        if self.project.version.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "project.version",
                "project.version is empty; the baseline resolves to api/.api",
            ));
        }
        if self.project.classes_dirs.is_empty() {
            issues.push(ConfigIssue::warning(
                "project.classes_dirs",
                "project.classes_dirs is empty; buildApi will scan nothing",
            ));
        }
        if self.api.extractor.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "api.extractor",
                "api.extractor is empty; buildApi cannot run",
            ));
        }
        if self.request.api_version.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "request.api_version",
                "request.api_version is empty",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[project]
name = "core"
version = "1.2.0"
root_dir = "/repo"
project_dir = "core"
classes_dirs = ["build/classes/release"]

[api]
api_file = "api/released.api"
extractor = "api-dump"
extractor_args = ["--format", "kotlin"]

[request]
timeout_ms = 30000
api_version = "v1beta"
disable_auto_function = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.project.name, "core");
        assert_eq!(config.project.project_dir, Some(PathBuf::from("core")));
        assert_eq!(config.api.extractor, "api-dump");
        assert_eq!(config.api.extractor_args.len(), 2);

        let options = config.request.to_request_options();
        assert_eq!(options.timeout(), Duration::from_secs(30));
        assert_eq!(options.api_version(), "v1beta");
        assert!(options.disable_auto_function());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[project]
version = "3.0.0"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.project.version, "3.0.0");
        // Defaults should apply
        assert_eq!(config.project.name, "project");
        assert_eq!(config.api.extractor, "api-extractor");
        assert!(config.request.to_request_options().is_unlimited());
    }

    #[test]
    fn test_validate_default_config_only_warns() {
        let issues = FileConfig::default().validate();
        assert!(issues.iter().all(|i| i.severity == Severity::Warning));
        assert!(issues.iter().any(|i| i.field == "project.classes_dirs"));
    }

    #[test]
    fn test_validate_empty_extractor_is_error() {
        let mut config = FileConfig::default();
        config.api.extractor = " ".to_string();
        let issues = config.validate();
        assert!(
            issues
                .iter()
                .any(|i| i.field == "api.extractor" && i.severity == Severity::Error)
        );
    }
}
