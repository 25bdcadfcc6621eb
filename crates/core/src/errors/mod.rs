//! Error types and classification for close operations

mod builders;
mod classify;
mod conversions;
mod display;
mod types;

pub use classify::{Category, Classify};
pub use types::{Error, Result};
