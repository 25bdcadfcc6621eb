//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Close {
                resource, message, ..
            } => {
                write!(f, "failed to close '{resource}': {message}")
            }
            Error::FileSystem {
                resource,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system {operation} operation failed for '{resource}': {source}"
                )
            }
            Error::Interrupted { resource } => {
                write!(f, "interrupted while closing '{resource}'")
            }
            Error::Runtime { message } => write!(f, "runtime error: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_close_display() {
        let err = Error::close("db-pool", "connection still in use");
        assert_eq!(
            err.to_string(),
            "failed to close 'db-pool': connection still in use"
        );
    }

    #[test]
    fn test_file_system_display() {
        let err = Error::file_system(
            "/tmp/out.log",
            "flush",
            io::Error::other("disk full"),
        );
        assert_eq!(
            err.to_string(),
            "file system flush operation failed for '/tmp/out.log': disk full"
        );
    }

    #[test]
    fn test_interrupted_and_runtime_display() {
        assert_eq!(
            Error::interrupted("socket").to_string(),
            "interrupted while closing 'socket'"
        );
        assert_eq!(
            Error::runtime("handle closed twice").to_string(),
            "runtime error: handle closed twice"
        );
    }
}
