//! Conversion implementations for error types

use super::types::Error;

// The io error stays as `source` so its kind remains inspectable by `Classify`.
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::FileSystem {
            resource: String::new(),
            operation: "unknown".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_io_error_conversion_keeps_source() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        match &err {
            Error::FileSystem { operation, source, .. } => {
                assert_eq!(operation, "unknown");
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
        assert!(err.source().is_some());
    }
}
