//! In-memory port implementations shared by the use case tests.

use crate::ports::api_extractor::{ApiExtractor, ExtractorError};
use crate::ports::file_copier::{CopyError, FileCopier};
use crate::ports::snapshot_reader::{ReadError, SnapshotReader};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A file system held in a map.
#[derive(Default)]
pub struct MemoryFs {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFs {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn write(&self, path: impl Into<PathBuf>, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.to_string());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.files.lock().unwrap().remove(path.as_ref());
    }
}

#[async_trait]
impl FileCopier for MemoryFs {
    async fn copy(&self, source: &Path, dest: &Path) -> Result<u64, CopyError> {
        let mut files = self.files.lock().unwrap();
        let content = files
            .get(source)
            .cloned()
            .ok_or_else(|| CopyError::MissingSource {
                path: source.to_path_buf(),
            })?;
        let bytes = content.len() as u64;
        files.insert(dest.to_path_buf(), content);
        Ok(bytes)
    }
}

#[async_trait]
impl SnapshotReader for MemoryFs {
    async fn read(&self, path: &Path) -> Result<String, ReadError> {
        self.get(path).ok_or_else(|| ReadError::Missing {
            path: path.to_path_buf(),
        })
    }
}

/// Arguments of one extractor invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractCall {
    pub classes_dirs: Vec<PathBuf>,
    pub dependencies: Vec<PathBuf>,
    pub output_file: PathBuf,
}

/// Extractor that writes a fixed snapshot into a [`MemoryFs`], or fails
/// and drops whatever was at the output path.
pub struct FakeExtractor {
    fs: Arc<MemoryFs>,
    snapshot: Option<String>,
    calls: Mutex<Vec<ExtractCall>>,
}

impl FakeExtractor {
    pub fn producing(fs: Arc<MemoryFs>, snapshot: &str) -> Arc<Self> {
        Arc::new(Self {
            fs,
            snapshot: Some(snapshot.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(fs: Arc<MemoryFs>) -> Arc<Self> {
        Arc::new(Self {
            fs,
            snapshot: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<ExtractCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApiExtractor for FakeExtractor {
    async fn extract(
        &self,
        classes_dirs: &[PathBuf],
        dependencies: &[PathBuf],
        output_file: &Path,
    ) -> Result<(), ExtractorError> {
        self.calls.lock().unwrap().push(ExtractCall {
            classes_dirs: classes_dirs.to_vec(),
            dependencies: dependencies.to_vec(),
            output_file: output_file.to_path_buf(),
        });
        match &self.snapshot {
            Some(snapshot) => {
                self.fs.write(output_file, snapshot);
                Ok(())
            }
            None => {
                self.fs.remove(output_file);
                Err(ExtractorError::Failed {
                    status: "exit status: 2".to_string(),
                    output: output_file.to_path_buf(),
                    stderr: "malformed class file".to_string(),
                })
            }
        }
    }
}
