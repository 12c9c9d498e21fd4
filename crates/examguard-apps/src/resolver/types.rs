//! Types shared by the resolver components.

use examguard_core::{KnownFolder, KnownFolders};
use tracing::error;

/// Placeholder for the 64-bit Program Files root, expanded at probe time.
pub const PROGRAM_FILES_64: &str = "%ProgramW6432%";

/// An ordered list of path segments, joined and expanded when probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath(Vec<String>);

impl CandidatePath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for CandidatePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("\\"))
    }
}

/// Standard installation folders, resolved once per request.
///
/// A folder the host cannot resolve is `None` and contributes no candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardFolders {
    pub program_files_x86: Option<String>,
    pub system: Option<String>,
    pub system_x86: Option<String>,
}

impl StandardFolders {
    /// Resolve each folder through `folders`, logging and skipping failures.
    pub fn resolve(folders: &dyn KnownFolders) -> Self {
        let lookup = |folder: KnownFolder| match folders.resolve(folder) {
            Ok(path) => Some(path.to_string_lossy().into_owned()),
            Err(e) => {
                error!(error = %e, "Failed to resolve folder {folder}!");
                None
            }
        };

        Self {
            program_files_x86: lookup(KnownFolder::ProgramFilesX86),
            system: lookup(KnownFolder::System),
            system_x86: lookup(KnownFolder::SystemX86),
        }
    }

    /// Available base directories in search priority order, 64-bit Program
    /// Files first.
    pub fn bases(&self) -> Vec<&str> {
        std::iter::once(PROGRAM_FILES_64)
            .chain(
                [&self.program_files_x86, &self.system, &self.system_x86]
                    .into_iter()
                    .filter_map(|folder| folder.as_deref()),
            )
            .collect()
    }
}
