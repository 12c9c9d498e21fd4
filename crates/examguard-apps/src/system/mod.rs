//! System implementations of the resolution ports.
//!
//! `default_*` helpers pick the right adapter for the build target: the
//! Windows registry and shell on Windows, environment-derived folders and a
//! no-op index everywhere else.

mod env;
mod folders;
mod fs;
mod registry;

use examguard_core::{InstalledAppIndex, KnownFolders};
use std::sync::Arc;

pub use env::SystemEnv;
pub use folders::EnvKnownFolders;
pub use fs::SystemFs;
pub use registry::NoopAppIndex;

#[cfg(windows)]
pub use folders::ShellKnownFolders;
#[cfg(windows)]
pub use registry::AppPathsRegistry;

/// The installed-application index for this platform.
pub fn default_app_index() -> Arc<dyn InstalledAppIndex> {
    #[cfg(windows)]
    {
        Arc::new(AppPathsRegistry)
    }

    #[cfg(not(windows))]
    {
        Arc::new(NoopAppIndex)
    }
}

/// The known-folder source for this platform.
pub fn default_known_folders() -> Arc<dyn KnownFolders> {
    #[cfg(windows)]
    {
        Arc::new(ShellKnownFolders)
    }

    #[cfg(not(windows))]
    {
        Arc::new(EnvKnownFolders::new(Arc::new(SystemEnv)))
    }
}
