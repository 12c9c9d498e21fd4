//! Installed-application index lookup.

use examguard_core::InstalledAppIndex;
use tracing::{debug, error};

/// Asks the installed-application index for an executable's base directory.
///
/// Lookup failures never abort resolution: they are logged and answered with
/// `None`, the same as a missing entry.
pub struct RegistryPathResolver<'a> {
    index: &'a dyn InstalledAppIndex,
}

impl<'a> RegistryPathResolver<'a> {
    pub fn new(index: &'a dyn InstalledAppIndex) -> Self {
        Self { index }
    }

    pub fn resolve(&self, executable_name: &str) -> Option<String> {
        match self.index.base_directory(executable_name) {
            Ok(Some(base)) if !base.trim().is_empty() => {
                debug!(executable = executable_name, base = %base, "Found installed application path");
                Some(base)
            }
            // A blank value would only probe relative to the working directory.
            Ok(Some(_) | None) => None,
            Err(e) => {
                error!(error = %e, "Failed to query path in registry for '{executable_name}'!");
                None
            }
        }
    }
}
