//! Real filesystem adapter.

use examguard_core::{FileProbe, ProbeError};
use std::io::ErrorKind;
use std::path::Path;

/// Production filesystem probe backed by `std::fs::metadata`.
pub struct SystemFs;

impl FileProbe for SystemFs {
    fn is_file(&self, path: &Path) -> Result<bool, ProbeError> {
        match std::fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(false)
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                Err(ProbeError::PermissionDenied {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => Err(ProbeError::Io {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
}
