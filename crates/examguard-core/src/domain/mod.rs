//! Pure domain types for application resolution.
//!
//! These types carry no infrastructure dependencies; the resolver and its
//! adapters live in `examguard-apps`.

mod application;
mod outcome;

pub use application::{ApplicationDescriptor, ApplicationHandle};
pub use outcome::{OutcomeKind, ResolutionOutcome};
