//! Executable path resolution for whitelisted applications.
//!
//! Finds the main executable of a whitelisted program by probing a fixed,
//! prioritized list of candidate locations.
//!
//! ## Architecture
//!
//! The resolver is split into small, focused modules:
//! - `types`: shared types (`CandidatePath`, `StandardFolders`)
//! - `candidates`: pure, ordered candidate generation
//! - `expand`: `%NAME%` placeholder expansion
//! - `registry`: installed-application index lookup (failures absorbed)
//! - `probe`: per-candidate existence test (failures absorbed)
//! - `locate`: orchestration, first match wins
//!
//! All host access goes through the ports in `examguard_core::ports`, so every
//! module is testable without a Windows machine.

mod candidates;
mod expand;
mod locate;
mod probe;
mod registry;
mod types;

pub use candidates::build_candidates;
pub use expand::expand_placeholders;
pub use locate::ExecutableLocator;
pub use probe::PathExistenceProbe;
pub use registry::RegistryPathResolver;
pub use types::{CandidatePath, PROGRAM_FILES_64, StandardFolders};
