//! Async standard output implementations.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWrite;

use super::AsyncOutputTarget;

/// Async output target for writing to stdout.
#[derive(Debug, Clone)]
pub struct AsyncStdoutOutput {
    id: String,
}

impl AsyncStdoutOutput {
    /// Create a new async stdout output target.
    pub fn new() -> Self {
        Self { id: "-".into() }
    }
}

impl Default for AsyncStdoutOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AsyncOutputTarget for AsyncStdoutOutput {
    fn id(&self) -> &str {
        &self.id
    }

    async fn open(&self) -> std::io::Result<Box<dyn AsyncWrite + Unpin + Send>> {
        Ok(Box::new(tokio::io::stdout()))
    }
}

/// Async output target for writing to files.
#[derive(Debug, Clone)]
pub struct AsyncFileOutput {
    id: String,
    path: PathBuf,
}

impl AsyncFileOutput {
    /// Create a new async file output target.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AsyncOutputTarget for AsyncFileOutput {
    fn id(&self) -> &str {
        &self.id
    }

    async fn open(&self) -> std::io::Result<Box<dyn AsyncWrite + Unpin + Send>> {
        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(&self.path)
            .await?;
        Ok(Box::new(file))
    }
}
