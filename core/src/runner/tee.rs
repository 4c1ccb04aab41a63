use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::RunnerError;

/// The optional output file, shared by the stdout and stderr readers.
///
/// Each line is written under the lock, so lines from the two streams
/// interleave only at line boundaries.
#[derive(Clone)]
pub struct LineTee {
    path: Arc<PathBuf>,
    file: Arc<Mutex<File>>,
}

impl LineTee {
    /// Creates or truncates `path`.
    pub async fn create(path: &Path) -> Result<Self, RunnerError> {
        let file = tokio::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .await
            .map_err(|source| RunnerError::OpenOutput {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: Arc::new(path.to_path_buf()),
            file: Arc::new(Mutex::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends the raw line bytes plus `\n`.
    pub async fn write_line(&self, line: &[u8]) -> Result<(), RunnerError> {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line);
        buf.push(b'\n');

        let mut file = self.file.lock().await;
        file.write_all(&buf).await.map_err(|source| self.write_err(source))
    }

    pub async fn flush(&self) -> Result<(), RunnerError> {
        let mut file = self.file.lock().await;
        file.flush().await.map_err(|source| self.write_err(source))
    }

    fn write_err(&self, source: std::io::Error) -> RunnerError {
        RunnerError::WriteOutput {
            path: self.path.to_path_buf(),
            source,
        }
    }
}
