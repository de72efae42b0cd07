//! Project layout value object
//!
//! A [`Project`] carries the handful of facts the snapshot tasks need:
//! where the root and project directories are, which version is being
//! built, and where the compiled output of the release variant lives.

use crate::core::error::DomainError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Build directory name, relative to the project directory.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// A project inside a (possibly multi-project) source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Project name, used to name the generated `<name>.api` file.
    pub name: String,
    /// Current project version.
    pub version: String,
    /// Root of the source tree. Equal to `project_dir` for single projects.
    pub root_dir: PathBuf,
    /// Directory of this project.
    pub project_dir: PathBuf,
    /// Directory for build outputs and temporary files.
    pub build_dir: PathBuf,
    /// Compiled-output directories of the release variant.
    pub classes_dirs: Vec<PathBuf>,
}

impl Project {
    /// Creates a single project rooted at `root_dir`.
    ///
    /// The project directory defaults to the root and the build directory
    /// to `<project_dir>/build`.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        root_dir: impl Into<PathBuf>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        let root_dir = root_dir.into();
        Ok(Self {
            name,
            version: version.into(),
            build_dir: root_dir.join(DEFAULT_BUILD_DIR),
            project_dir: root_dir.clone(),
            root_dir,
            classes_dirs: Vec::new(),
        })
    }

    /// Places the project in a subdirectory of the root.
    ///
    /// Relative paths resolve against the root directory. The build
    /// directory moves with the project.
    pub fn with_project_dir(mut self, project_dir: impl AsRef<Path>) -> Self {
        self.project_dir = resolve(&self.root_dir, project_dir.as_ref());
        self.build_dir = self.project_dir.join(DEFAULT_BUILD_DIR);
        self
    }

    /// Overrides the build directory. Relative paths resolve against the
    /// project directory.
    pub fn with_build_dir(mut self, build_dir: impl AsRef<Path>) -> Self {
        self.build_dir = resolve(&self.project_dir, build_dir.as_ref());
        self
    }

    /// Sets the compiled-output directories. Relative paths resolve
    /// against the project directory.
    pub fn with_classes_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.classes_dirs = dirs
            .into_iter()
            .map(|d| resolve(&self.project_dir, d.as_ref()))
            .collect();
        self
    }

    /// Resolves a path relative to the project directory.
    pub fn file(&self, relative: impl AsRef<Path>) -> PathBuf {
        resolve(&self.project_dir, relative.as_ref())
    }

    /// Resolves a path relative to the root directory.
    pub fn root_file(&self, relative: impl AsRef<Path>) -> PathBuf {
        resolve(&self.root_dir, relative.as_ref())
    }

    /// Temporary directory owned by the build, `<build_dir>/tmp/<name>`.
    pub fn temp_dir(&self, name: &str) -> PathBuf {
        self.build_dir.join("tmp").join(name)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
