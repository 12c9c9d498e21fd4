//! Environment variable access port.

use std::ffi::OsString;

/// Access to environment variables (injectable for testing).
pub trait EnvProvider: Send + Sync {
    /// Get an environment variable.
    fn get(&self, key: &str) -> Option<OsString>;
}
