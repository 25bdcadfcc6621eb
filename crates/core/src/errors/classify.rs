//! Error classification used to decide how close failures propagate.
//!
//! Rust has no checked/unchecked split in the type system, so the split is
//! carried as data: every error that can come out of a close reports a
//! [`Category`] and whether it signals an interruption of the calling thread.

use super::types::Error;
use std::io;

/// Whether an error is expected to be handled by the caller or is a fault
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Recoverable failure the caller is expected to handle
    Checked,
    /// Runtime fault; propagates without wrapping
    Unchecked,
}

impl Category {
    pub fn is_checked(self) -> bool {
        matches!(self, Category::Checked)
    }

    pub fn is_unchecked(self) -> bool {
        matches!(self, Category::Unchecked)
    }
}

/// Classification of close errors
pub trait Classify {
    /// The propagation category of this error
    fn category(&self) -> Category;

    /// Whether this error signals that the calling thread was interrupted
    fn is_interrupted(&self) -> bool {
        false
    }
}

impl Classify for Error {
    fn category(&self) -> Category {
        match self {
            Error::Runtime { .. } => Category::Unchecked,
            Error::Close { .. } | Error::FileSystem { .. } | Error::Interrupted { .. } => {
                Category::Checked
            }
        }
    }

    fn is_interrupted(&self) -> bool {
        match self {
            Error::Interrupted { .. } => true,
            Error::FileSystem { source, .. } => source.kind() == io::ErrorKind::Interrupted,
            _ => false,
        }
    }
}

impl Classify for io::Error {
    fn category(&self) -> Category {
        Category::Checked
    }

    fn is_interrupted(&self) -> bool {
        self.kind() == io::ErrorKind::Interrupted
    }
}

impl<T: Classify + ?Sized> Classify for Box<T> {
    fn category(&self) -> Category {
        (**self).category()
    }

    fn is_interrupted(&self) -> bool {
        (**self).is_interrupted()
    }
}
