//! Process environment adapter.

use examguard_core::EnvProvider;
use std::ffi::OsString;

/// Production environment provider that reads from the actual process environment.
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variable_is_none() {
        assert!(
            SystemEnv
                .get("EXAMGUARD_TEST_VARIABLE_THAT_IS_NEVER_SET")
                .is_none()
        );
    }
}
