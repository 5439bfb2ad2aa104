//! Domain logic shared across the taskpulse workspace.
//!
//! Kept dependency-light on purpose: everything in here is pure computation
//! over plain types, so both the database layer and the HTTP layer can use it
//! without dragging in each other's stacks.

pub mod error;
pub mod filter;
pub mod progress;
pub mod types;

pub use error::CoreError;
