//! Utilities for closing groups of resources.
//!
//! Every handle in a group gets a close attempt even when earlier ones fail,
//! and every failure is reported: the first as the primary error, the rest
//! attached to it as suppressed errors.
//!
//! ```
//! use closeables_utils::{close_all, close_fn, Close, Error};
//!
//! let handles: Vec<Option<Box<dyn Close<Error = Error>>>> = vec![
//!     Some(Box::new(close_fn(|| Ok::<(), Error>(())))),
//!     None,
//!     Some(Box::new(close_fn(|| Err(Error::close("socket", "reset by peer"))))),
//! ];
//!
//! let result = close_all(handles);
//!
//! let failure = result.unwrap_err();
//! assert_eq!(failure.primary().to_string(), "failed to close 'socket': reset by peer");
//! assert!(failure.suppressed().is_empty());
//! ```

pub mod cleanup;
pub mod tracing;

pub use cleanup::*;
pub use closeables_core::{interrupt, Category, Classify, Error, Result};
