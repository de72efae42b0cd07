//! Project configuration from TOML (`[project]` section)

use apisnap_domain::{DomainError, Project};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw project layout from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProjectConfig {
    pub name: String,
    pub version: String,
    pub root_dir: PathBuf,
    /// Defaults to `root_dir`; relative paths resolve against it
    pub project_dir: Option<PathBuf>,
    /// Defaults to `<project_dir>/build`
    pub build_dir: Option<PathBuf>,
    /// Relative paths resolve against `project_dir`
    pub classes_dirs: Vec<PathBuf>,
}

impl Default for FileProjectConfig {
    fn default() -> Self {
        Self {
            name: "project".to_string(),
            version: "unspecified".to_string(),
            root_dir: PathBuf::from("."),
            project_dir: None,
            build_dir: None,
            classes_dirs: Vec::new(),
        }
    }
}

impl FileProjectConfig {
    pub fn to_project(&self) -> Result<Project, DomainError> {
        let mut project = Project::new(&self.name, &self.version, &self.root_dir)?;
        if let Some(dir) = &self.project_dir {
            project = project.with_project_dir(dir);
        }
        if let Some(dir) = &self.build_dir {
            project = project.with_build_dir(dir);
        }
        Ok(project.with_classes_dirs(&self.classes_dirs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_project_resolves_layout() {
        let config = FileProjectConfig {
            name: "sdk".to_string(),
            version: "0.9.0".to_string(),
            root_dir: PathBuf::from("/repo"),
            project_dir: Some(PathBuf::from("sdk")),
            build_dir: None,
            classes_dirs: vec![PathBuf::from("out/classes")],
        };
        let project = config.to_project().unwrap();
        assert_eq!(project.project_dir, PathBuf::from("/repo/sdk"));
        assert_eq!(project.build_dir, PathBuf::from("/repo/sdk/build"));
        assert_eq!(
            project.classes_dirs,
            vec![PathBuf::from("/repo/sdk/out/classes")]
        );
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let config = FileProjectConfig {
            name: String::new(),
            ..Default::default()
        };
        assert_eq!(config.to_project().unwrap_err(), DomainError::EmptyProjectName);
    }
}
