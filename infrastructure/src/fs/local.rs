//! Local file system implementation of the copy and read ports.

use apisnap_application::{CopyError, FileCopier, ReadError, SnapshotReader};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Copies and reads snapshot files on the local disk.
#[derive(Debug, Clone, Default)]
pub struct LocalSnapshotFiles;

impl LocalSnapshotFiles {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileCopier for LocalSnapshotFiles {
    async fn copy(&self, source: &Path, dest: &Path) -> Result<u64, CopyError> {
        match tokio::fs::metadata(source).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                return Err(CopyError::MissingSource {
                    path: source.to_path_buf(),
                });
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(CopyError::MissingSource {
                    path: source.to_path_buf(),
                });
            }
            Err(source_err) => {
                return Err(CopyError::Io {
                    path: source.to_path_buf(),
                    source: source_err,
                });
            }
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CopyError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let bytes = tokio::fs::copy(source, dest)
            .await
            .map_err(|e| CopyError::Io {
                path: dest.to_path_buf(),
                source: e,
            })?;
        debug!("Copied {} bytes to {}", bytes, dest.display());
        Ok(bytes)
    }
}

#[async_trait]
impl SnapshotReader for LocalSnapshotFiles {
    async fn read(&self, path: &Path) -> Result<String, ReadError> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ReadError::Missing {
                    path: path.to_path_buf(),
                }
            } else {
                ReadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_copy_overwrites_destination() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("core.api");
        let dest = dir.path().join("public.api");
        fs::write(&source, "short\n").unwrap();
        fs::write(&dest, "a considerably longer old snapshot\n").unwrap();

        let bytes = LocalSnapshotFiles::new().copy(&source, &dest).await.unwrap();

        assert_eq!(bytes, 6);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "short\n");
    }

    #[tokio::test]
    async fn test_copy_missing_source_leaves_destination() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("missing.api");
        let dest = dir.path().join("public.api");
        fs::write(&dest, "released\n").unwrap();

        let err = LocalSnapshotFiles::new()
            .copy(&source, &dest)
            .await
            .unwrap_err();

        assert!(err.is_missing_source());
        assert!(err.to_string().contains("missing.api"));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "released\n");
    }

    #[tokio::test]
    async fn test_copy_missing_source_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out/public.api");

        let result = LocalSnapshotFiles::new()
            .copy(&dir.path().join("missing.api"), &dest)
            .await;

        assert!(result.is_err());
        assert!(!dest.exists());
        assert!(!dir.path().join("out").exists());
    }

    #[tokio::test]
    async fn test_copy_directory_source_is_missing() {
        let dir = tempfile::tempdir().unwrap();

        let err = LocalSnapshotFiles::new()
            .copy(dir.path(), &dir.path().join("public.api"))
            .await
            .unwrap_err();

        assert!(err.is_missing_source());
    }

    #[tokio::test]
    async fn test_read_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalSnapshotFiles::new()
            .read(&dir.path().join("api/1.0.0.api"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReadError::Missing { .. }));
    }

    #[tokio::test]
    async fn test_read_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.api");
        fs::write(&path, "class A\n").unwrap();
        assert_eq!(
            LocalSnapshotFiles::new().read(&path).await.unwrap(),
            "class A\n"
        );
    }
}
