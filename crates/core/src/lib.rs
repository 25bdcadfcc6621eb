//! Core types, errors, and constants for closing groups of resources.
//!
//! ## Key Components
//!
//! - **`errors`**: The `Error` enum and `Result` alias, plus the `Classify`
//!   trait that tells the batch closer whether a failure is checked,
//!   unchecked, or an interruption.
//! - **`interrupt`**: The per-thread interruption flag that closing code
//!   re-raises when a close reports an interruption.
//! - **`constants`**: Shared static constants such as the unchecked wrapper
//!   message and logging environment variable names.

pub mod constants;
pub mod errors;
pub mod interrupt;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use self::{
    constants::*,
    errors::{Category, Classify, Error, Result},
};
