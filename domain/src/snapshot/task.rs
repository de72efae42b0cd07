//! Task descriptors
//!
//! Descriptors are plain data: they say what each task reads and writes.
//! Execution lives in the application layer.

use crate::core::error::DomainError;
use crate::project::Project;
use crate::snapshot::settings::SnapshotSettings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File name of the exported snapshot in the project directory.
pub const PUBLIC_API_FILE: &str = "public.api";

/// Name of a registered snapshot task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskName {
    #[serde(rename = "buildApi")]
    BuildApi,
    #[serde(rename = "exportApi")]
    ExportApi,
    #[serde(rename = "checkApi")]
    CheckApi,
}

impl TaskName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskName::BuildApi => "buildApi",
            TaskName::ExportApi => "exportApi",
            TaskName::CheckApi => "checkApi",
        }
    }

    /// One-line description shown by `apisnap tasks`.
    pub fn description(&self) -> &'static str {
        match self {
            TaskName::BuildApi => "Creates a .api file containing the current public API",
            TaskName::ExportApi => "Exports the file generated by buildApi to public.api",
            TaskName::CheckApi => "Compares the file generated by buildApi with the released API",
        }
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buildApi" | "build" => Ok(TaskName::BuildApi),
            "exportApi" | "export" => Ok(TaskName::ExportApi),
            "checkApi" | "check" => Ok(TaskName::CheckApi),
            other => Err(DomainError::UnknownTask(other.to_string())),
        }
    }
}

/// Produces a fresh snapshot of the public API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildApiTask {
    /// Used to name the output file.
    pub project_name: String,
    /// Compiled-output directories to scan.
    pub input_classes_dirs: Vec<PathBuf>,
    /// Directories the compiled output depends on.
    pub input_dependencies: Vec<PathBuf>,
    /// Temporary directory the extractor writes into.
    pub output_api_dir: PathBuf,
}

impl BuildApiTask {
    /// The release classes serve as both the input and its dependency
    /// closure.
    pub fn for_project(project: &Project) -> Self {
        let classes = project.classes_dirs.clone();
        Self {
            project_name: project.name.clone(),
            input_dependencies: classes.clone(),
            input_classes_dirs: classes,
            output_api_dir: project.temp_dir("api"),
        }
    }

    /// Declared output: `<output_api_dir>/<project_name>.api`.
    pub fn output_file(&self) -> PathBuf {
        self.output_api_dir
            .join(format!("{}.api", self.project_name))
    }
}

/// Copies the snapshot produced by [`BuildApiTask`] to `public.api`.
///
/// The source is always the build task's declared output; there is no way
/// to set it independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportApiTask {
    source: PathBuf,
    dest: PathBuf,
}

impl ExportApiTask {
    pub fn from_build(build: &BuildApiTask, project: &Project) -> Self {
        Self {
            source: build.output_file(),
            dest: project.file(PUBLIC_API_FILE),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn dest(&self) -> &Path {
        &self.dest
    }
}

/// Compares the snapshot produced by [`BuildApiTask`] with the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckApiTask {
    actual: PathBuf,
    baseline: PathBuf,
}

impl CheckApiTask {
    pub fn from_build(build: &BuildApiTask, settings: &SnapshotSettings) -> Self {
        Self {
            actual: build.output_file(),
            baseline: settings.api_file().to_path_buf(),
        }
    }

    pub fn actual(&self) -> &Path {
        &self.actual
    }

    pub fn baseline(&self) -> &Path {
        &self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project::new("core", "1.0.0", "/repo")
            .unwrap()
            .with_project_dir("core")
            .with_classes_dirs(["build/classes/release"])
    }

    #[test]
    fn test_task_name_roundtrip() {
        for name in [TaskName::BuildApi, TaskName::ExportApi, TaskName::CheckApi] {
            assert_eq!(name.as_str().parse::<TaskName>().unwrap(), name);
        }
        assert_eq!("export".parse::<TaskName>().unwrap(), TaskName::ExportApi);
        assert!("publishApi".parse::<TaskName>().unwrap_err().is_unknown_task());
    }

    #[test]
    fn test_build_task_uses_classes_as_dependencies() {
        let build = BuildApiTask::for_project(&project());
        assert_eq!(
            build.input_classes_dirs,
            vec![PathBuf::from("/repo/core/build/classes/release")]
        );
        assert_eq!(build.input_dependencies, build.input_classes_dirs);
        assert_eq!(build.output_api_dir, PathBuf::from("/repo/core/build/tmp/api"));
        assert_eq!(
            build.output_file(),
            PathBuf::from("/repo/core/build/tmp/api/core.api")
        );
    }

    #[test]
    fn test_export_source_is_build_output() {
        let project = project();
        let mut build = BuildApiTask::for_project(&project);
        build.output_api_dir = PathBuf::from("/tmp/other");
        let export = ExportApiTask::from_build(&build, &project);
        assert_eq!(export.source(), build.output_file());
        assert_eq!(export.dest(), Path::new("/repo/core/public.api"));
    }

    #[test]
    fn test_check_reads_baseline_from_settings() {
        let project = project();
        let build = BuildApiTask::for_project(&project);
        let settings = SnapshotSettings::for_project(&project);
        let check = CheckApiTask::from_build(&build, &settings);
        assert_eq!(check.actual(), build.output_file());
        assert_eq!(check.baseline(), Path::new("/repo/api/1.0.0.api"));
    }
}
