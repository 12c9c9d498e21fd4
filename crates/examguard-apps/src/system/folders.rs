//! Known-folder adapters.

use examguard_core::{EnvProvider, FolderError, KnownFolder, KnownFolders};
use std::path::PathBuf;
use std::sync::Arc;

/// Derives the known folders from the standard Windows environment variables.
///
/// Works on any host that exposes `ProgramFiles(x86)`/`ProgramFiles` and
/// `SystemRoot`/`windir`, which makes it usable under compatibility layers
/// and in tests.
pub struct EnvKnownFolders {
    env: Arc<dyn EnvProvider>,
}

impl EnvKnownFolders {
    pub fn new(env: Arc<dyn EnvProvider>) -> Self {
        Self { env }
    }

    fn var(&self, key: &str) -> Option<PathBuf> {
        self.env
            .get(key)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }

    fn system_root(&self) -> Option<PathBuf> {
        self.var("SystemRoot").or_else(|| self.var("windir"))
    }

    /// A 64-bit host exposes `ProgramFiles(x86)` to every process.
    fn is_64_bit_host(&self) -> bool {
        self.var("ProgramFiles(x86)").is_some()
    }
}

impl KnownFolders for EnvKnownFolders {
    fn resolve(&self, folder: KnownFolder) -> Result<PathBuf, FolderError> {
        let path = match folder {
            KnownFolder::ProgramFilesX86 => self
                .var("ProgramFiles(x86)")
                .or_else(|| self.var("ProgramFiles")),
            KnownFolder::System => self.system_root().map(|root| root.join("System32")),
            KnownFolder::SystemX86 => {
                let dir = if self.is_64_bit_host() {
                    "SysWOW64"
                } else {
                    "System32"
                };
                self.system_root().map(|root| root.join(dir))
            }
        };

        path.ok_or(FolderError::Unavailable(folder))
    }
}

#[cfg(windows)]
pub use shell::ShellKnownFolders;

#[cfg(windows)]
#[allow(unsafe_code)]
mod shell {
    use examguard_core::{FolderError, KnownFolder, KnownFolders};
    use std::path::PathBuf;
    use windows::Win32::Foundation::HANDLE;
    use windows::Win32::System::Com::CoTaskMemFree;
    use windows::Win32::UI::Shell::{
        FOLDERID_ProgramFilesX86, FOLDERID_System, FOLDERID_SystemX86, KF_FLAG_DEFAULT,
        SHGetKnownFolderPath,
    };

    /// Known folders as reported by the shell (`SHGetKnownFolderPath`).
    pub struct ShellKnownFolders;

    impl KnownFolders for ShellKnownFolders {
        fn resolve(&self, folder: KnownFolder) -> Result<PathBuf, FolderError> {
            let id = match folder {
                KnownFolder::ProgramFilesX86 => &FOLDERID_ProgramFilesX86,
                KnownFolder::System => &FOLDERID_System,
                KnownFolder::SystemX86 => &FOLDERID_SystemX86,
            };

            // SAFETY: `id` points to a static GUID; the returned buffer is
            // released with `CoTaskMemFree` below.
            let raw = unsafe { SHGetKnownFolderPath(id, KF_FLAG_DEFAULT, HANDLE::default()) }
                .map_err(|e| FolderError::LookupFailed {
                    folder,
                    reason: e.to_string(),
                })?;

            // SAFETY: on success `raw` is a valid NUL-terminated wide string
            // owned by us until freed.
            let path = unsafe { raw.to_string() };
            unsafe { CoTaskMemFree(Some(raw.0.cast_const().cast())) };

            path.map(PathBuf::from)
                .map_err(|e| FolderError::LookupFailed {
                    folder,
                    reason: e.to_string(),
                })
        }
    }
}
