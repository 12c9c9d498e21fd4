//! Shared fixtures: a fake Windows layout inside a temporary directory.

#![allow(dead_code)]

use examguard_apps::ApplicationFactory;
use examguard_apps::system::{EnvKnownFolders, SystemFs};
use examguard_core::{EnvProvider, IndexError, InstalledAppIndex};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Environment variables backed by a map.
pub struct MapEnv(HashMap<String, OsString>);

impl EnvProvider for MapEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.0.get(key).cloned()
    }
}

/// Index with fixed entries.
pub struct StaticIndex(pub HashMap<String, String>);

impl InstalledAppIndex for StaticIndex {
    fn base_directory(&self, executable_name: &str) -> Result<Option<String>, IndexError> {
        Ok(self.0.get(executable_name).cloned())
    }
}

/// Index that is never reachable.
pub struct BrokenIndex;

impl InstalledAppIndex for BrokenIndex {
    fn base_directory(&self, _executable_name: &str) -> Result<Option<String>, IndexError> {
        Err(IndexError::Unavailable("registry hive not loaded".to_string()))
    }
}

/// A 64-bit Windows-like host rooted in a temp directory.
pub struct FakeHost {
    pub root: TempDir,
}

impl FakeHost {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        for dir in [
            "Program Files",
            "Program Files (x86)",
            "Windows/System32",
            "Windows/SysWOW64",
        ] {
            std::fs::create_dir_all(root.path().join(dir)).unwrap();
        }
        Self { root }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Create an empty file at `relative`, including parent directories.
    pub fn install(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"MZ").unwrap();
        path
    }

    pub fn env(&self) -> Arc<MapEnv> {
        let var = |relative: &str| OsString::from(self.path(relative));
        Arc::new(MapEnv(HashMap::from([
            ("ProgramW6432".to_string(), var("Program Files")),
            ("ProgramFiles(x86)".to_string(), var("Program Files (x86)")),
            ("SystemRoot".to_string(), var("Windows")),
        ])))
    }

    pub fn factory_with_index(&self, index: Arc<dyn InstalledAppIndex>) -> ApplicationFactory {
        let env = self.env();
        ApplicationFactory::new(
            index,
            Arc::new(EnvKnownFolders::new(env.clone())),
            env,
            Arc::new(SystemFs),
        )
    }

    /// Factory for a host that only defines `ProgramW6432`, so none of the
    /// known folders can be derived.
    pub fn factory_without_system_root(&self) -> ApplicationFactory {
        let env = Arc::new(MapEnv(HashMap::from([(
            "ProgramW6432".to_string(),
            OsString::from(self.path("Program Files")),
        )])));
        ApplicationFactory::new(
            Arc::new(StaticIndex(HashMap::new())),
            Arc::new(EnvKnownFolders::new(env.clone())),
            env,
            Arc::new(SystemFs),
        )
    }

    pub fn factory(&self) -> ApplicationFactory {
        self.factory_with_index(Arc::new(StaticIndex(HashMap::new())))
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}
