//! Filesystem existence probe port.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Faults raised while probing a single candidate path.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The candidate could not be turned into a valid path.
    #[error("Invalid path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// Access to the path (or one of its parents) was denied.
    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Any other I/O error.
    #[error("I/O error on {}: {reason}", .path.display())]
    Io { path: PathBuf, reason: String },
}

/// Filesystem existence checks (injectable for testing).
pub trait FileProbe: Send + Sync {
    /// Whether a regular file exists at `path`.
    ///
    /// A missing path or a directory is `Ok(false)`; only genuine faults are
    /// errors.
    fn is_file(&self, path: &Path) -> Result<bool, ProbeError>;
}
