//! Special-folder lookup port.

use std::path::PathBuf;
use thiserror::Error;

/// Logical folders the application search needs beyond the 64-bit
/// Program Files root (which is expanded from `%ProgramW6432%` instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownFolder {
    /// 32-bit Program Files root (`Program Files (x86)` on 64-bit hosts).
    ProgramFilesX86,
    /// Native system directory (`System32`).
    System,
    /// 32-bit system directory (`SysWOW64` on 64-bit hosts).
    SystemX86,
}

impl std::fmt::Display for KnownFolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProgramFilesX86 => write!(f, "ProgramFilesX86"),
            Self::System => write!(f, "System"),
            Self::SystemX86 => write!(f, "SystemX86"),
        }
    }
}

/// Errors raised while resolving a known folder.
#[derive(Debug, Error)]
pub enum FolderError {
    /// The host has no such folder or it could not be determined.
    #[error("Cannot determine folder {0}")]
    Unavailable(KnownFolder),

    /// The OS lookup itself failed.
    #[error("Folder lookup for {folder} failed: {reason}")]
    LookupFailed { folder: KnownFolder, reason: String },
}

/// Resolve logical folder identifiers to absolute paths.
pub trait KnownFolders: Send + Sync {
    fn resolve(&self, folder: KnownFolder) -> Result<PathBuf, FolderError>;
}
