//! Closing groups of resources with aggregated failures.
//!
//! Every handle gets exactly one close attempt, whatever happened to the
//! handles before it. The first failure becomes the primary error and every
//! later failure is attached to it as suppressed.

use super::close::Close;
use super::failure::{CloseFailure, UncheckedCloseError};
use closeables_core::{interrupt, Classify};
use std::fmt;

/// Accumulates close results into a single outcome.
///
/// `close_all` and the `close_all!` macro drive one of these; it is public so
/// callers with their own iteration (or heterogeneous handles) can reuse the
/// same aggregation.
#[derive(Debug)]
pub struct CloseCollector<E> {
    failure: Option<CloseFailure<E>>,
    attempted: usize,
}

impl<E> Default for CloseCollector<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> CloseCollector<E> {
    pub fn new() -> Self {
        Self {
            failure: None,
            attempted: 0,
        }
    }

    /// Number of results recorded so far
    pub fn attempted(&self) -> usize {
        self.attempted
    }

    /// Number of failures recorded so far
    pub fn failed(&self) -> usize {
        self.failure.as_ref().map_or(0, CloseFailure::len)
    }
}

impl<E: Classify + fmt::Display> CloseCollector<E> {
    /// Record the result of one close attempt.
    ///
    /// An interruption re-raises the interruption flag of the current thread
    /// whether it ends up primary or suppressed.
    pub fn record(&mut self, result: Result<(), E>) {
        let index = self.attempted;
        self.attempted += 1;

        let Err(error) = result else {
            return;
        };

        if error.is_interrupted() {
            tracing::warn!(index, error = %error, "close interrupted, re-raising interruption");
            interrupt::interrupt();
        } else {
            tracing::debug!(index, error = %error, "close failed");
        }

        match self.failure.as_mut() {
            Some(failure) => failure.add_suppressed(error),
            None => self.failure = Some(CloseFailure::new(error)),
        }
    }

    /// The aggregated outcome, primary error as-is
    pub fn finish(self) -> Result<(), CloseFailure<E>> {
        let failed = self.failed();
        match self.failure {
            Some(failure) => {
                tracing::debug!(
                    attempted = self.attempted,
                    failed,
                    "closing finished with errors"
                );
                Err(failure)
            }
            None => {
                tracing::trace!(attempted = self.attempted, "closing finished");
                Ok(())
            }
        }
    }

    /// The aggregated outcome, with a checked primary error wrapped
    pub fn finish_unchecked(self) -> Result<(), UncheckedCloseError<E>> {
        self.finish().map_err(UncheckedCloseError::from_failure)
    }
}

/// Close every handle, returning the first failure with later failures
/// attached as suppressed.
///
/// Absent (`None`) handles are skipped. A failure never stops the remaining
/// handles from being closed. If any failure is an interruption, the current
/// thread is marked interrupted before this returns.
pub fn close_all<I>(handles: I) -> Result<(), CloseFailure<<I::Item as Close>::Error>>
where
    I: IntoIterator,
    I::Item: Close,
    <I::Item as Close>::Error: Classify + fmt::Display,
{
    collect(handles).finish()
}

/// Close every handle like [`close_all`], but never fail with a checked error.
///
/// An unchecked primary failure is returned as-is. A checked one is wrapped in
/// [`UncheckedCloseError::Wrapped`], which displays as `error on close` and
/// keeps the aggregate (suppressed errors included) as its cause.
pub fn close_all_unchecked<I>(
    handles: I,
) -> Result<(), UncheckedCloseError<<I::Item as Close>::Error>>
where
    I: IntoIterator,
    I::Item: Close,
    <I::Item as Close>::Error: Classify + fmt::Display,
{
    collect(handles).finish_unchecked()
}

fn collect<I>(handles: I) -> CloseCollector<<I::Item as Close>::Error>
where
    I: IntoIterator,
    I::Item: Close,
    <I::Item as Close>::Error: Classify + fmt::Display,
{
    let mut collector = CloseCollector::new();
    for mut handle in handles {
        collector.record(handle.close());
    }
    collector
}

/// Close each argument in order, see [`close_all`].
///
/// Takes at least one handle; an empty group has no error type to infer, so
/// use [`close_all`] with a typed empty sequence instead.
/// Arguments may be of different types as long as their error types agree.
/// Each argument is closed through `&mut`, so it must be a place or an
/// expression whose temporary can be borrowed.
#[macro_export]
macro_rules! close_all {
    ($($handle:expr),+ $(,)?) => {{
        let mut collector = $crate::cleanup::CloseCollector::new();
        $(
            collector.record($crate::cleanup::Close::close(&mut $handle));
        )*
        collector.finish()
    }};
}

/// Close each argument in order, see [`close_all_unchecked`].
///
/// Takes at least one handle, like `close_all!`.
#[macro_export]
macro_rules! close_all_unchecked {
    ($($handle:expr),+ $(,)?) => {{
        let mut collector = $crate::cleanup::CloseCollector::new();
        $(
            collector.record($crate::cleanup::Close::close(&mut $handle));
        )*
        collector.finish_unchecked()
    }};
}
