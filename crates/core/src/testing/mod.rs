//! Property-based testing utilities for close outcomes
//!
//! Generators describe what a handle does when it is closed; test code turns
//! each [`Outcome`] into a real handle and checks the aggregated result
//! against the outcomes that were generated.

use crate::errors::{Error, Result};

/// What a generated handle does when closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No handle at this position
    Absent,
    /// Closes cleanly
    Succeeds,
    /// Fails with a checked close error
    Checked,
    /// Fails with an unchecked runtime error
    Unchecked,
    /// Fails with an interruption error
    Interrupted,
}

impl Outcome {
    pub fn is_present(self) -> bool {
        self != Outcome::Absent
    }

    pub fn is_failure(self) -> bool {
        matches!(
            self,
            Outcome::Checked | Outcome::Unchecked | Outcome::Interrupted
        )
    }

    /// The close result for the handle at `index`, or `None` when absent.
    ///
    /// Error messages carry the index so tests can match errors back to the
    /// handle that produced them.
    pub fn close_result(self, index: usize) -> Option<Result<()>> {
        let resource = format!("handle-{index}");
        match self {
            Outcome::Absent => None,
            Outcome::Succeeds => Some(Ok(())),
            Outcome::Checked => Some(Err(Error::close(resource, "checked failure"))),
            Outcome::Unchecked => Some(Err(Error::runtime(resource))),
            Outcome::Interrupted => Some(Err(Error::interrupted(resource))),
        }
    }
}

/// Identifier of the handle that produced an error built by [`Outcome::close_result`]
pub fn failing_resource(error: &Error) -> Option<&str> {
    match error {
        Error::Close { resource, .. } | Error::Interrupted { resource } => Some(resource.as_str()),
        Error::Runtime { message } => Some(message.as_str()),
        Error::FileSystem { .. } => None,
    }
}

/// Indices of the failing handles, in input order
pub fn failing_indices(outcomes: &[Outcome]) -> Vec<usize> {
    outcomes
        .iter()
        .enumerate()
        .filter(|(_, outcome)| outcome.is_failure())
        .map(|(index, _)| index)
        .collect()
}

/// Property-based test generators
pub mod generators {
    use super::Outcome;
    use proptest::collection::vec;
    use proptest::prelude::*;

    /// Any outcome, failures included
    pub fn outcome() -> impl Strategy<Value = Outcome> {
        prop_oneof![
            1 => Just(Outcome::Absent),
            3 => Just(Outcome::Succeeds),
            1 => Just(Outcome::Checked),
            1 => Just(Outcome::Unchecked),
            1 => Just(Outcome::Interrupted),
        ]
    }

    /// Outcomes that never fail
    pub fn non_failing_outcome() -> impl Strategy<Value = Outcome> {
        prop_oneof![Just(Outcome::Absent), Just(Outcome::Succeeds)]
    }

    /// Sequences of outcomes, including the empty sequence
    pub fn outcomes() -> impl Strategy<Value = Vec<Outcome>> {
        vec(outcome(), 0..=24)
    }

    /// Sequences that close without any failure
    pub fn non_failing_outcomes() -> impl Strategy<Value = Vec<Outcome>> {
        vec(non_failing_outcome(), 0..=24)
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use super::*;
    use crate::errors::Classify;
    use proptest::prelude::*;

    #[test]
    fn test_close_result_shapes() {
        assert!(Outcome::Absent.close_result(0).is_none());
        assert!(matches!(Outcome::Succeeds.close_result(1), Some(Ok(()))));

        let err = Outcome::Interrupted.close_result(4).unwrap().unwrap_err();
        assert!(err.is_interrupted());
        assert_eq!(failing_resource(&err), Some("handle-4"));

        let err = Outcome::Unchecked.close_result(2).unwrap().unwrap_err();
        assert!(err.category().is_unchecked());
        assert_eq!(failing_resource(&err), Some("handle-2"));
    }

    proptest! {
        #[test]
        fn prop_non_failing_outcomes_produce_no_errors(seq in non_failing_outcomes()) {
            prop_assert!(failing_indices(&seq).is_empty());
            for (index, outcome) in seq.iter().enumerate() {
                prop_assert!(!matches!(outcome.close_result(index), Some(Err(_))));
            }
        }

        #[test]
        fn prop_failing_indices_match_errors(seq in outcomes()) {
            let from_results: Vec<usize> = seq
                .iter()
                .enumerate()
                .filter_map(|(index, outcome)| match outcome.close_result(index) {
                    Some(Err(_)) => Some(index),
                    _ => None,
                })
                .collect();
            prop_assert_eq!(failing_indices(&seq), from_results);
        }
    }
}
