//! Resolution outcome taxonomy.

use serde::{Deserialize, Serialize};

use super::application::ApplicationHandle;

/// Result of a single resolution request.
///
/// Exactly one variant per call. `NotFound` is the expected case of a
/// whitelisted program that simply isn't installed; `Error` means an
/// unexpected fault escaped every per-source absorption point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Success(ApplicationHandle),
    NotFound,
    Error,
}

impl ResolutionOutcome {
    /// The fieldless classification of this outcome.
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Success(_) => OutcomeKind::Success,
            Self::NotFound => OutcomeKind::NotFound,
            Self::Error => OutcomeKind::Error,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Borrow the handle, if resolution succeeded.
    pub const fn handle(&self) -> Option<&ApplicationHandle> {
        match self {
            Self::Success(handle) => Some(handle),
            Self::NotFound | Self::Error => None,
        }
    }

    /// Take ownership of the handle, if resolution succeeded.
    pub fn into_handle(self) -> Option<ApplicationHandle> {
        match self {
            Self::Success(handle) => Some(handle),
            Self::NotFound | Self::Error => None,
        }
    }
}

/// Classification of a [`ResolutionOutcome`] without the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Success,
    NotFound,
    Error,
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::NotFound => write!(f, "not found"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ApplicationDescriptor;
    use std::path::PathBuf;

    #[test]
    fn test_only_success_carries_a_handle() {
        let handle = ApplicationHandle::new(
            ApplicationDescriptor::new("Calculator", "calc.exe"),
            PathBuf::from("/sys/calc.exe"),
        );
        let success = ResolutionOutcome::Success(handle.clone());

        assert_eq!(success.kind(), OutcomeKind::Success);
        assert_eq!(success.handle(), Some(&handle));
        assert_eq!(success.into_handle(), Some(handle));
        assert!(ResolutionOutcome::NotFound.into_handle().is_none());
        assert!(ResolutionOutcome::Error.handle().is_none());
    }

    #[test]
    fn test_outcome_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OutcomeKind::NotFound).unwrap(),
            "\"not_found\""
        );
        assert_eq!(OutcomeKind::Error.to_string(), "error");
    }
}
