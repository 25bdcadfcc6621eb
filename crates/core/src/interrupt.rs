//! Per-thread interruption flag.
//!
//! A cooperative cancellation signal local to the executing thread. Code that
//! observes an interruption while it cannot act on it (for example while
//! closing resources) re-raises it here so the caller's cancellation checks
//! still see it.

use std::cell::Cell;

thread_local! {
    static INTERRUPTED: Cell<bool> = const { Cell::new(false) };
}

/// Mark the current thread as interrupted
pub fn interrupt() {
    INTERRUPTED.with(|flag| flag.set(true));
}

/// Whether the current thread is marked as interrupted. Does not clear the flag.
pub fn is_interrupted() -> bool {
    INTERRUPTED.with(Cell::get)
}

/// Read and clear the current thread's interruption flag
pub fn take_interrupted() -> bool {
    INTERRUPTED.with(|flag| flag.replace(false))
}
