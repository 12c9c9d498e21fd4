//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the resolution service expects from the
//! host. They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - Ports return explicit `Result`/`Option` values; absorbing and logging a
//!   failure is the caller's decision
//! - All ports are `Send + Sync` so a single factory can be shared between threads
//! - System implementations live in `examguard-apps`

pub mod app_index;
pub mod env;
pub mod folders;
pub mod fs;
pub mod server;

pub use app_index::{IndexError, InstalledAppIndex};
pub use env::EnvProvider;
pub use folders::{FolderError, KnownFolder, KnownFolders};
pub use fs::{FileProbe, ProbeError};
pub use server::{
    ConnectionInfo, Exam, ServerError, ServerProxy, ServerResponse, ServerSettings,
};
