// src/source/file.rs
// Reference document read from the local filesystem

use crate::error::{Result, SimcheckError};
use crate::source::ReferenceSource;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Reference text read from a file on disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ReferenceSource for FileSource {
    async fn fetch(&self) -> Result<String> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SimcheckError::ReferenceUnavailable(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;
        debug!(path = %self.path.display(), bytes = text.len(), "Read reference document");
        Ok(text)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "the cat sat on the mat").unwrap();

        let source = FileSource::new(file.path().to_path_buf());
        assert_eq!(source.fetch().await.unwrap(), "the cat sat on the mat");
    }

    #[tokio::test]
    async fn test_missing_file_is_reference_unavailable() {
        let source = FileSource::new(PathBuf::from("/nonexistent/database1.txt"));
        let err = source.fetch().await.unwrap_err();
        assert!(err.is_reference_unavailable());
        assert!(err.to_string().contains("database1.txt"));
    }
}
