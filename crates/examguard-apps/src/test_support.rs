//! Mock ports with predefined responses for unit tests.

use examguard_core::{
    EnvProvider, FileProbe, FolderError, IndexError, InstalledAppIndex, KnownFolder,
    KnownFolders, ProbeError,
};
use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Environment with predefined variables.
#[derive(Default)]
pub struct MockEnv {
    vars: HashMap<String, OsString>,
}

impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvProvider for MockEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

/// Environment that expands `%ProgramW6432%` to `/pf64`.
pub fn test_env() -> MockEnv {
    MockEnv::new().with_var("ProgramW6432", "/pf64")
}

/// Simulated filesystem that records every probed path.
#[derive(Default)]
pub struct MockFs {
    files: HashSet<PathBuf>,
    denied: HashSet<PathBuf>,
    probed: Mutex<Vec<PathBuf>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    /// Probing `path` fails with an access-denied fault.
    #[must_use]
    pub fn with_denied(mut self, path: impl Into<PathBuf>) -> Self {
        self.denied.insert(path.into());
        self
    }

    pub fn probed(&self) -> Vec<PathBuf> {
        self.probed.lock().unwrap().clone()
    }
}

impl FileProbe for MockFs {
    fn is_file(&self, path: &Path) -> Result<bool, ProbeError> {
        self.probed.lock().unwrap().push(path.to_path_buf());

        if self.denied.contains(path) {
            return Err(ProbeError::PermissionDenied {
                path: path.to_path_buf(),
            });
        }
        Ok(self.files.contains(path))
    }
}

/// Installed-application index backed by a map, or failing on every lookup.
#[derive(Default)]
pub struct MockAppIndex {
    entries: HashMap<String, String>,
    failing: bool,
    calls: AtomicUsize,
}

impl MockAppIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_entry(mut self, executable: impl Into<String>, base: impl Into<String>) -> Self {
        self.entries.insert(executable.into(), base.into());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl InstalledAppIndex for MockAppIndex {
    fn base_directory(&self, executable_name: &str) -> Result<Option<String>, IndexError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing {
            return Err(IndexError::AccessDenied {
                executable: executable_name.to_string(),
            });
        }
        Ok(self.entries.get(executable_name).cloned())
    }
}

/// Known folders backed by a map; missing folders are unavailable.
pub struct MockFolders {
    folders: HashMap<KnownFolder, PathBuf>,
    panics: bool,
}

impl MockFolders {
    /// `/pf86`, `/sys32` and `/syswow64`.
    pub fn standard() -> Self {
        Self {
            folders: HashMap::from([
                (KnownFolder::ProgramFilesX86, PathBuf::from("/pf86")),
                (KnownFolder::System, PathBuf::from("/sys32")),
                (KnownFolder::SystemX86, PathBuf::from("/syswow64")),
            ]),
            panics: false,
        }
    }

    /// Every lookup fails.
    pub fn none() -> Self {
        Self {
            folders: HashMap::new(),
            panics: false,
        }
    }

    /// Every lookup panics, simulating a collaborator bug.
    pub fn panicking() -> Self {
        Self {
            folders: HashMap::new(),
            panics: true,
        }
    }

    #[must_use]
    pub fn without(mut self, folder: KnownFolder) -> Self {
        self.folders.remove(&folder);
        self
    }
}

impl KnownFolders for MockFolders {
    fn resolve(&self, folder: KnownFolder) -> Result<PathBuf, FolderError> {
        assert!(!self.panics, "folder lookup exploded");
        self.folders
            .get(&folder)
            .cloned()
            .ok_or(FolderError::Unavailable(folder))
    }
}
