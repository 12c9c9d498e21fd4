//! Whitelisted application domain types.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A whitelist entry naming an external program permitted to run.
///
/// Owned by the whitelist configuration; resolution only borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDescriptor {
    /// Human-readable name shown to the user and used in log messages.
    pub display_name: String,
    /// File name of the main executable (e.g. `calc.exe`).
    pub executable_name: String,
    /// Optional install-path hint, relative to the standard folders or absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable_path: Option<String>,
}

impl ApplicationDescriptor {
    /// Create a descriptor without an install-path hint.
    pub fn new(display_name: impl Into<String>, executable_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            executable_name: executable_name.into(),
            executable_path: None,
        }
    }

    /// Set the install-path hint.
    #[must_use]
    pub fn with_executable_path(mut self, path: impl Into<String>) -> Self {
        self.executable_path = Some(path.into());
        self
    }
}

/// Opaque handle to a resolved, launchable external application.
///
/// Only created when resolution succeeds. The launch/monitor subsystem takes
/// ownership of it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationHandle {
    descriptor: ApplicationDescriptor,
    executable: PathBuf,
}

impl ApplicationHandle {
    /// Bind a resolved executable path to the descriptor it was resolved for.
    pub fn new(descriptor: ApplicationDescriptor, executable: PathBuf) -> Self {
        Self {
            descriptor,
            executable,
        }
    }

    /// The whitelist entry this handle was created from.
    pub const fn descriptor(&self) -> &ApplicationDescriptor {
        &self.descriptor
    }

    /// The executable path as it existed at resolution time.
    pub fn executable_path(&self) -> &Path {
        &self.executable
    }

    pub fn display_name(&self) -> &str {
        &self.descriptor.display_name
    }
}
