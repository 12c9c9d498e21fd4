//! Whitelisted application resolution for examguard.
//!
//! Given a whitelist descriptor, [`ApplicationFactory::try_create`] searches
//! the standard installation folders, the descriptor's path hint and the
//! installed-application index, and returns a handle to the first executable
//! it finds together with a `Success`/`NotFound`/`Error` classification.
//!
//! ```rust,no_run
//! use examguard_apps::ApplicationFactory;
//! use examguard_core::ApplicationDescriptor;
//!
//! let factory = ApplicationFactory::system();
//! let outcome = factory.try_create(&ApplicationDescriptor::new("Calculator", "calc.exe"));
//!
//! if let Some(handle) = outcome.handle() {
//!     println!("Resolved to: {}", handle.executable_path().display());
//! }
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod factory;
pub mod resolver;
pub mod system;

#[cfg(test)]
mod test_support;

pub use factory::ApplicationFactory;
pub use resolver::CandidatePath;
