//! Core error type definitions

/// Result type alias for closeables operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while closing a resource, using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A resource reported a recoverable failure while closing
    Close {
        resource: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system operations performed as part of a close
    FileSystem {
        resource: String,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// The close was cut short because the calling thread was interrupted
    Interrupted { resource: String },

    /// A runtime fault surfaced during close (broken invariant, poisoned state)
    Runtime { message: String },
}
