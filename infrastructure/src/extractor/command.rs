//! Process-backed API extractor
//!
//! Runs an external program to produce the snapshot. The command line is
//!
//! ```text
//! <program> <args...> --output <file> [--classes <dir>]... [--dependency <dir>]...
//! ```
//!
//! The program owns the snapshot format; a non-zero exit is reported with
//! its stderr and nothing is retried. Any snapshot already at the output
//! path is removed before the program starts, and whatever a failing run
//! wrote is removed afterwards.

use apisnap_application::{ApiExtractor, ExtractorError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Extractor that shells out to a configured program.
#[derive(Debug, Clone)]
pub struct CommandApiExtractor {
    program: String,
    args: Vec<String>,
}

impl CommandApiExtractor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Arguments placed before the generated ones.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn resolve_program(&self) -> Result<PathBuf, ExtractorError> {
        which::which(&self.program).map_err(|_| ExtractorError::NotFound {
            program: self.program.clone(),
        })
    }

    fn command_args(
        &self,
        classes_dirs: &[PathBuf],
        dependencies: &[PathBuf],
        output_file: &Path,
    ) -> Vec<String> {
        let mut args = self.args.clone();
        args.push("--output".to_string());
        args.push(output_file.to_string_lossy().into_owned());
        for dir in classes_dirs {
            args.push("--classes".to_string());
            args.push(dir.to_string_lossy().into_owned());
        }
        for dir in dependencies {
            args.push("--dependency".to_string());
            args.push(dir.to_string_lossy().into_owned());
        }
        args
    }
}

#[async_trait]
impl ApiExtractor for CommandApiExtractor {
    async fn extract(
        &self,
        classes_dirs: &[PathBuf],
        dependencies: &[PathBuf],
        output_file: &Path,
    ) -> Result<(), ExtractorError> {
        let program = self.resolve_program()?;

        if let Some(dir) = output_file.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| ExtractorError::OutputDir {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        discard_output(output_file)
            .await
            .map_err(|source| ExtractorError::StaleOutput {
                path: output_file.to_path_buf(),
                source,
            })?;

        let args = self.command_args(classes_dirs, dependencies, output_file);
        info!("Running API extractor: {}", program.display());
        debug!("Extractor args: {:?}", args);

        let output = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| ExtractorError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.trim().is_empty() {
            debug!("Extractor stdout: {}", stdout.trim());
        }

        if !output.status.success() {
            if let Err(e) = discard_output(output_file).await {
                warn!(
                    "Could not remove partial snapshot {}: {}",
                    output_file.display(),
                    e
                );
            }
            return Err(ExtractorError::Failed {
                status: output.status.to_string(),
                output: output_file.to_path_buf(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

/// Removes `path` if present.
async fn discard_output(path: &Path) -> std::io::Result<()> {
    match tokio::fs::remove_file(path).await {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
