/// Constants used throughout the closeables codebase
// Message of the wrapper raised by `close_all_unchecked` for checked failures
pub const UNCHECKED_CLOSE_MESSAGE: &str = "error on close";

// Logging
pub const CLOSEABLES_LOG_VAR: &str = "CLOSEABLES_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";
