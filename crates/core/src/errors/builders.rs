//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create a close error
    #[must_use]
    pub fn close(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Close {
            resource: resource.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a close error with a source error
    #[must_use]
    pub fn close_with_source(
        resource: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Close {
            resource: resource.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a file system error
    #[must_use]
    pub fn file_system(
        resource: impl Into<String>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            resource: resource.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create an interruption error
    #[must_use]
    pub fn interrupted(resource: impl Into<String>) -> Self {
        Error::Interrupted {
            resource: resource.into(),
        }
    }

    /// Create a runtime error
    #[must_use]
    pub fn runtime(message: impl Into<String>) -> Self {
        Error::Runtime {
            message: message.into(),
        }
    }
}
