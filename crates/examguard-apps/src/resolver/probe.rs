//! Existence probing of a single candidate.

use examguard_core::{EnvProvider, FileProbe, ProbeError};
use std::path::{Path, PathBuf};
use tracing::{error, trace};

use super::expand::expand_placeholders;
use super::types::CandidatePath;

/// Joins, expands and tests one candidate at a time.
///
/// A fault on one candidate is logged and reported as "no match" so the
/// caller can move on to the next one.
pub struct PathExistenceProbe<'a> {
    env: &'a dyn EnvProvider,
    fs: &'a dyn FileProbe,
}

impl<'a> PathExistenceProbe<'a> {
    pub fn new(env: &'a dyn EnvProvider, fs: &'a dyn FileProbe) -> Self {
        Self { env, fs }
    }

    /// The expanded path of `candidate` if a regular file exists there.
    pub fn probe(&self, candidate: &CandidatePath) -> Option<PathBuf> {
        match self.check(candidate) {
            Ok(found) => found,
            Err(e) => {
                error!(error = %e, "Failed to test path {candidate}!");
                None
            }
        }
    }

    fn check(&self, candidate: &CandidatePath) -> Result<Option<PathBuf>, ProbeError> {
        let joined = join_segments(candidate.segments())?;
        let expanded = PathBuf::from(expand_placeholders(&joined, self.env)?);
        let exists = self.fs.is_file(&expanded)?;

        trace!(path = %expanded.display(), exists, "Probed candidate");
        Ok(exists.then_some(expanded))
    }
}

/// Join segments, skipping empty ones. Any rooted segment replaces everything
/// before it, so on Windows `C:\Program Files` + `\Tools` gives `\Tools`
/// rather than `PathBuf::push`'s `C:\Tools`.
fn join_segments(segments: &[String]) -> Result<String, ProbeError> {
    let mut path = PathBuf::new();

    for segment in segments {
        if segment.contains('\0') {
            return Err(ProbeError::InvalidPath {
                path: segments.join("\\"),
                reason: "segment contains a NUL character".to_string(),
            });
        }
        if Path::new(segment).has_root() {
            path = PathBuf::from(segment);
        } else if !segment.is_empty() {
            path.push(segment);
        }
    }

    path.into_os_string()
        .into_string()
        .map_err(|raw| ProbeError::InvalidPath {
            path: raw.to_string_lossy().into_owned(),
            reason: "path is not valid Unicode".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockEnv, MockFs};

    #[test]
    fn test_probe_expands_and_finds_file() {
        let env = MockEnv::new().with_var("ProgramW6432", "/pf64");
        let fs = MockFs::new().with_file("/pf64/calc.exe");
        let probe = PathExistenceProbe::new(&env, &fs);

        let found = probe.probe(&CandidatePath::new(["%ProgramW6432%", "calc.exe"]));

        assert_eq!(found, Some(PathBuf::from("/pf64/calc.exe")));
    }

    #[test]
    fn test_probe_missing_file_is_none() {
        let env = MockEnv::new();
        let fs = MockFs::new();
        let probe = PathExistenceProbe::new(&env, &fs);

        assert!(probe.probe(&CandidatePath::new(["/sys32", "calc.exe"])).is_none());
        assert_eq!(fs.probed(), vec![PathBuf::from("/sys32/calc.exe")]);
    }

    #[test]
    fn test_probe_absorbs_filesystem_fault() {
        let env = MockEnv::new();
        let fs = MockFs::new().with_denied("/locked/calc.exe");
        let probe = PathExistenceProbe::new(&env, &fs);

        assert!(probe.probe(&CandidatePath::new(["/locked", "calc.exe"])).is_none());
    }

    #[test]
    fn test_probe_rejects_nul_segment_without_touching_fs() {
        let env = MockEnv::new();
        let fs = MockFs::new();
        let probe = PathExistenceProbe::new(&env, &fs);

        assert!(probe.probe(&CandidatePath::new(["/sys32", "ca\0lc.exe"])).is_none());
        assert!(fs.probed().is_empty());
    }

    #[test]
    fn test_join_skips_empty_and_restarts_at_absolute_segment() {
        let joined = join_segments(&[
            "/pf86".to_string(),
            String::new(),
            "/opt/tools".to_string(),
            "tool.exe".to_string(),
        ])
        .unwrap();

        assert_eq!(PathBuf::from(joined), PathBuf::from("/opt/tools/tool.exe"));
    }

    #[cfg(windows)]
    #[test]
    fn test_join_root_relative_segment_drops_drive() {
        let joined = join_segments(&[
            r"C:\Program Files (x86)".to_string(),
            r"\Tools".to_string(),
            "tool.exe".to_string(),
        ])
        .unwrap();

        assert_eq!(joined, r"\Tools\tool.exe");
    }
}
