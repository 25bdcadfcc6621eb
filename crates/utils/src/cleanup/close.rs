//! The `Close` capability and adapters for common handle shapes.

/// A resource that can be closed once, reporting failure as a value
pub trait Close {
    type Error;

    /// Close the resource
    fn close(&mut self) -> Result<(), Self::Error>;
}

/// `None` is an absent handle: nothing is closed and nothing fails.
impl<C: Close> Close for Option<C> {
    type Error = C::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        match self {
            Some(handle) => handle.close(),
            None => Ok(()),
        }
    }
}

impl<C: Close + ?Sized> Close for &mut C {
    type Error = C::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }
}

impl<C: Close + ?Sized> Close for Box<C> {
    type Error = C::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }
}

/// Handle backed by a closure, see [`close_fn`]
pub struct CloseFn<F>(F);

impl<F> std::fmt::Debug for CloseFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloseFn").finish_non_exhaustive()
    }
}

impl<F, E> Close for CloseFn<F>
where
    F: FnMut() -> Result<(), E>,
{
    type Error = E;

    fn close(&mut self) -> Result<(), E> {
        (self.0)()
    }
}

/// Turn a closure into a closeable handle
pub fn close_fn<F, E>(f: F) -> CloseFn<F>
where
    F: FnMut() -> Result<(), E>,
{
    CloseFn(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use closeables_core::Error;

    struct Counter {
        closes: usize,
    }

    impl Close for Counter {
        type Error = Error;

        fn close(&mut self) -> Result<(), Error> {
            self.closes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_absent_handle_is_a_no_op() {
        let mut absent: Option<Counter> = None;
        assert!(absent.close().is_ok());

        let mut present = Some(Counter { closes: 0 });
        assert!(present.close().is_ok());
        assert_eq!(present.unwrap().closes, 1);
    }

    #[test]
    fn test_references_and_boxes_forward() {
        let mut counter = Counter { closes: 0 };
        let mut by_ref = &mut counter;
        Close::close(&mut by_ref).unwrap();
        assert_eq!(counter.closes, 1);

        let mut boxed: Box<dyn Close<Error = Error>> = Box::new(Counter { closes: 0 });
        assert!(boxed.close().is_ok());
    }

    #[test]
    fn test_close_fn_runs_closure_each_call() {
        let mut calls = 0;
        {
            let mut handle = close_fn(|| {
                calls += 1;
                Err::<(), _>(Error::close("fn", "refused"))
            });
            assert!(handle.close().is_err());
        }
        assert_eq!(calls, 1);
    }
}
