//! Aggregated close failures.

use closeables_core::{Category, Classify, UNCHECKED_CLOSE_MESSAGE};
use std::error::Error as StdError;
use std::fmt;

/// The first error raised while closing a group of handles, together with
/// every error raised after it.
///
/// The primary error is kept exactly as the handle returned it, so callers
/// can still match on its kind. Suppressed errors are kept in the order they
/// were encountered.
#[derive(Debug)]
pub struct CloseFailure<E> {
    primary: E,
    suppressed: Vec<E>,
}

impl<E> CloseFailure<E> {
    /// Start an aggregate with its primary error and nothing suppressed
    pub fn new(primary: E) -> Self {
        Self {
            primary,
            suppressed: Vec::new(),
        }
    }

    /// Attach an error raised after the primary one
    pub fn add_suppressed(&mut self, error: E) {
        self.suppressed.push(error);
    }

    pub fn primary(&self) -> &E {
        &self.primary
    }

    /// Errors raised after the primary one, in encounter order
    pub fn suppressed(&self) -> &[E] {
        &self.suppressed
    }

    /// Number of errors aggregated, primary included
    pub fn len(&self) -> usize {
        1 + self.suppressed.len()
    }

    /// Always false; an aggregate holds at least its primary error
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All errors, primary first
    pub fn errors(&self) -> impl Iterator<Item = &E> {
        std::iter::once(&self.primary).chain(self.suppressed.iter())
    }

    pub fn into_primary(self) -> E {
        self.primary
    }

    pub fn into_parts(self) -> (E, Vec<E>) {
        (self.primary, self.suppressed)
    }
}

impl<E: Classify> CloseFailure<E> {
    /// Whether any aggregated error, not only the primary, is an interruption
    pub fn any_interrupted(&self) -> bool {
        self.errors().any(Classify::is_interrupted)
    }
}

/// Displays as the primary error. The alternate form (`{:#}`) also lists the
/// suppressed errors.
impl<E: fmt::Display> fmt::Display for CloseFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.primary, f)?;
        if f.alternate() {
            for error in &self.suppressed {
                write!(f, "\n  suppressed: {error}")?;
            }
        }
        Ok(())
    }
}

impl<E: StdError + 'static> StdError for CloseFailure<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.primary.source()
    }
}

impl<E: Classify> Classify for CloseFailure<E> {
    fn category(&self) -> Category {
        self.primary.category()
    }

    fn is_interrupted(&self) -> bool {
        self.primary.is_interrupted()
    }
}

/// Failure of `close_all_unchecked`: never a checked error.
#[derive(Debug)]
pub enum UncheckedCloseError<E> {
    /// The primary error was already unchecked and is raised as-is
    Unchecked(CloseFailure<E>),
    /// The primary error was checked; the aggregate is carried as the cause
    Wrapped(CloseFailure<E>),
}

impl<E: Classify> UncheckedCloseError<E> {
    /// Wrap `failure` unless its primary error is already unchecked
    pub fn from_failure(failure: CloseFailure<E>) -> Self {
        match failure.category() {
            Category::Unchecked => UncheckedCloseError::Unchecked(failure),
            Category::Checked => UncheckedCloseError::Wrapped(failure),
        }
    }
}

impl<E> UncheckedCloseError<E> {
    /// The aggregated failure, whether wrapped or not
    pub fn failure(&self) -> &CloseFailure<E> {
        match self {
            UncheckedCloseError::Unchecked(failure) | UncheckedCloseError::Wrapped(failure) => {
                failure
            }
        }
    }

    /// The wrapped aggregate, `None` when the primary error was raised as-is
    pub fn cause(&self) -> Option<&CloseFailure<E>> {
        match self {
            UncheckedCloseError::Wrapped(failure) => Some(failure),
            UncheckedCloseError::Unchecked(_) => None,
        }
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, UncheckedCloseError::Wrapped(_))
    }

    pub fn into_failure(self) -> CloseFailure<E> {
        match self {
            UncheckedCloseError::Unchecked(failure) | UncheckedCloseError::Wrapped(failure) => {
                failure
            }
        }
    }
}

impl<E: fmt::Display> fmt::Display for UncheckedCloseError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UncheckedCloseError::Unchecked(failure) => fmt::Display::fmt(failure, f),
            UncheckedCloseError::Wrapped(_) => f.write_str(UNCHECKED_CLOSE_MESSAGE),
        }
    }
}

impl<E: StdError + 'static> StdError for UncheckedCloseError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            UncheckedCloseError::Unchecked(failure) => failure.source(),
            UncheckedCloseError::Wrapped(failure) => Some(failure),
        }
    }
}

impl<E: Classify> Classify for UncheckedCloseError<E> {
    fn category(&self) -> Category {
        Category::Unchecked
    }

    fn is_interrupted(&self) -> bool {
        self.failure().is_interrupted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use closeables_core::Error;

    fn failure_of(primary: Error, suppressed: Vec<Error>) -> CloseFailure<Error> {
        let mut failure = CloseFailure::new(primary);
        for error in suppressed {
            failure.add_suppressed(error);
        }
        failure
    }

    #[test]
    fn test_failure_accessors() {
        let failure = failure_of(
            Error::close("a", "first"),
            vec![Error::runtime("second"), Error::interrupted("c")],
        );

        assert_eq!(failure.len(), 3);
        assert!(!failure.is_empty());
        assert_eq!(failure.primary().to_string(), "failed to close 'a': first");
        assert_eq!(failure.suppressed().len(), 2);
        assert!(failure.any_interrupted());
        assert!(!failure.is_interrupted());
        assert_eq!(failure.category(), Category::Checked);

        let (primary, suppressed) = failure.into_parts();
        assert!(matches!(primary, Error::Close { .. }));
        assert!(matches!(suppressed[0], Error::Runtime { .. }));
        assert!(matches!(suppressed[1], Error::Interrupted { .. }));
    }

    #[test]
    fn test_failure_display() {
        let failure = failure_of(Error::close("a", "first"), vec![Error::runtime("second")]);
        assert_eq!(failure.to_string(), "failed to close 'a': first");
        assert_eq!(
            format!("{failure:#}"),
            "failed to close 'a': first\n  suppressed: runtime error: second"
        );
    }

    #[test]
    fn test_failure_source_is_primary_source() {
        let io = std::io::Error::other("disk gone");
        let failure = CloseFailure::new(Error::close_with_source("log", "flush failed", io));
        let source = failure.source().expect("primary carries a source");
        assert_eq!(source.to_string(), "disk gone");
    }

    #[test]
    fn test_checked_primary_is_wrapped() {
        let error = UncheckedCloseError::from_failure(failure_of(
            Error::close("a", "first"),
            vec![Error::runtime("second")],
        ));

        assert!(error.is_wrapped());
        assert_eq!(error.to_string(), "error on close");
        assert_eq!(error.category(), Category::Unchecked);

        let cause = error.cause().expect("wrapped cause");
        assert_eq!(cause.suppressed().len(), 1);
        let source = error.source().expect("wrapper has a source");
        assert_eq!(source.to_string(), "failed to close 'a': first");
    }

    #[test]
    fn test_unchecked_primary_is_not_wrapped() {
        let error = UncheckedCloseError::from_failure(failure_of(
            Error::runtime("first"),
            vec![Error::close("b", "second")],
        ));

        assert!(!error.is_wrapped());
        assert!(error.cause().is_none());
        assert_eq!(error.to_string(), "runtime error: first");
        assert_eq!(error.failure().suppressed().len(), 1);
        assert!(matches!(error.into_failure().into_primary(), Error::Runtime { .. }));
    }
}
