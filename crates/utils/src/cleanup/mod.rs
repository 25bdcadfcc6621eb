//! Closing groups of resources.
//!
//! [`close_all`] closes every handle in a sequence and reports failures as a
//! single [`CloseFailure`]; [`close_all_unchecked`] does the same but wraps
//! checked failures so callers only ever see unchecked ones. The `close_all!`
//! and `close_all_unchecked!` macros are the variadic forms.

mod close;
mod failure;
mod handler;

pub use close::{close_fn, Close, CloseFn};
pub use failure::{CloseFailure, UncheckedCloseError};
pub use handler::{close_all, close_all_unchecked, CloseCollector};
