// Copyright (c) 2025 - Cowboy AI, Inc.
//! Uploaded credentials file reading
//!
//! A drop zone produces a file reference; the resolver only ever sees the
//! text. [`FsFileReader`] applies the drop zone's acceptance rules before
//! reading.

use async_trait::async_trait;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::errors::{ConnectionError, ConnectionResult};

/// Produces the full text of a user-selected file
#[async_trait]
pub trait FileReader: Send + Sync {
    async fn read_to_string(&self, path: &Path) -> ConnectionResult<String>;
}

/// Limits applied to uploaded credentials files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Largest accepted file, in bytes
    pub max_bytes: u64,

    /// Accepted extensions, without the dot
    pub accepted_extensions: Vec<String>,
}

impl UploadPolicy {
    pub fn check_extension(&self, path: &Path) -> ConnectionResult<()> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension {
            Some(ext) if self.accepted_extensions.iter().any(|a| *a == ext) => Ok(()),
            _ => Err(ConnectionError::FileRejected(format!(
                "{} is not one of .{}",
                path.display(),
                self.accepted_extensions.join(", .")
            ))),
        }
    }

    pub fn check_size(&self, path: &Path, len: u64) -> ConnectionResult<()> {
        if len > self.max_bytes {
            return Err(ConnectionError::FileRejected(format!(
                "{} is {} bytes, limit is {}",
                path.display(),
                len,
                self.max_bytes
            )));
        }
        Ok(())
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_bytes: 500,
            accepted_extensions: vec!["txt".to_string(), "env".to_string()],
        }
    }
}

/// Reads uploads from the local filesystem
#[derive(Debug, Clone, Default)]
pub struct FsFileReader {
    policy: UploadPolicy,
}

impl FsFileReader {
    pub fn new(policy: UploadPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }
}

#[async_trait]
impl FileReader for FsFileReader {
    async fn read_to_string(&self, path: &Path) -> ConnectionResult<String> {
        let unreadable = |e: std::io::Error| ConnectionError::FileUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        };

        self.policy.check_extension(path)?;

        // Read at most one byte past the limit
        let file = File::open(path).await.map_err(unreadable)?;
        let mut bytes = Vec::new();
        file.take(self.policy.max_bytes.saturating_add(1))
            .read_to_end(&mut bytes)
            .await
            .map_err(unreadable)?;
        self.policy.check_size(path, bytes.len() as u64)?;

        let text = String::from_utf8(bytes).map_err(|e| ConnectionError::FileUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!("Read {} bytes from {}", text.len(), path.display());
        Ok(text)
    }
}
