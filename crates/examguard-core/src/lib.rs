//! Core domain types and port definitions for examguard.
//!
//! `examguard-core` describes *what* application resolution works with:
//! whitelist descriptors, the handle produced on success, the three-way
//! outcome, and the capability traits (environment, filesystem, known folders,
//! installed-application index, exam server) that adapters implement.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{ApplicationDescriptor, ApplicationHandle, OutcomeKind, ResolutionOutcome};
pub use ports::{
    EnvProvider, FileProbe, FolderError, IndexError, InstalledAppIndex, KnownFolder, KnownFolders,
    ProbeError,
};
