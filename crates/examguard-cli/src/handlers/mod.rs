//! Command handlers.

pub mod candidates;
pub mod resolve;
