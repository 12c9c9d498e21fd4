//! Installed-application path index port.
//!
//! The OS keeps an index of installed programs keyed by executable file name
//! (the `App Paths` registry key on Windows). Platforms without one use a
//! no-op implementation that never has an entry.

use thiserror::Error;

/// Errors raised while reading the installed-application index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index denied access to the entry.
    #[error("Access to index entry for '{executable}' denied")]
    AccessDenied { executable: String },

    /// The index could not be queried at all.
    #[error("Index unavailable: {0}")]
    Unavailable(String),

    /// The entry exists but its value is not a usable path string.
    #[error("Malformed index value for '{executable}': {reason}")]
    MalformedValue { executable: String, reason: String },
}

/// Read-only lookup of an installation base directory by executable name.
pub trait InstalledAppIndex: Send + Sync {
    /// Base directory registered for `executable_name`.
    ///
    /// `Ok(None)` when there is no entry; that is not an error.
    fn base_directory(&self, executable_name: &str) -> Result<Option<String>, IndexError>;
}
