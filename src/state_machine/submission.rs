// Copyright (c) 2025 - Cowboy AI, Inc.
//! Submission State Machine
//!
//! # States
//!
//! - Idle: Nothing submitted yet, or the surface was dismissed
//! - Submitting: One connection attempt outstanding
//! - Connected: Last attempt succeeded
//! - Failed: Last attempt failed
//!
//! # Inputs
//!
//! - Submit: Idle | Connected | Failed → Submitting
//! - Succeed: Submitting → Connected
//! - Fail: Submitting → Failed
//! - Dismiss: Any → Idle
//!
//! Submitting accepts no second Submit, which keeps at most one attempt in
//! flight per session.

use serde::{Deserialize, Serialize};

use super::{StateMachine, TransitionError, TransitionResult};

/// Where a session is in its submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Connected,
    Failed,
}

/// Submission command (FSM input)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionInput {
    /// User pressed submit
    Submit,

    /// Connector reported success
    Succeed,

    /// Connector reported failure
    Fail,

    /// Submission surface closed
    Dismiss,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

impl StateMachine for SubmissionState {
    type Input = SubmissionInput;
    type Output = ();

    fn transition(&self, input: &Self::Input) -> TransitionResult<(Self, Self::Output)> {
        use SubmissionInput::*;
        use SubmissionState::*;

        match (self, input) {
            (Idle | Connected | Failed, Submit) => Ok((Submitting, ())),
            (Submitting, Succeed) => Ok((Connected, ())),
            (Submitting, Fail) => Ok((Failed, ())),
            (_, Dismiss) => Ok((Idle, ())),

            (Submitting, Submit) | (Idle | Connected | Failed, Succeed | Fail) => {
                Err(TransitionError::InvalidTransition {
                    from: format!("{:?}", self),
                    input: format!("{:?}", input),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(SubmissionState::Idle ; "from idle")]
    #[test_case(SubmissionState::Connected ; "from connected")]
    #[test_case(SubmissionState::Failed ; "from failed")]
    fn test_submit_enters_submitting(state: SubmissionState) {
        let (next, ()) = state.transition(&SubmissionInput::Submit).unwrap();
        assert_eq!(next, SubmissionState::Submitting);
    }

    #[test]
    fn test_submitting_is_exclusive() {
        assert!(!SubmissionState::Submitting.can_transition(&SubmissionInput::Submit));
    }

    #[test]
    fn test_resolution() {
        let submitting = SubmissionState::Submitting;
        assert_eq!(
            submitting.transition(&SubmissionInput::Succeed).unwrap().0,
            SubmissionState::Connected
        );
        assert_eq!(
            submitting.transition(&SubmissionInput::Fail).unwrap().0,
            SubmissionState::Failed
        );
    }

    #[test]
    fn test_resolution_requires_outstanding_attempt() {
        assert!(!SubmissionState::Idle.can_transition(&SubmissionInput::Succeed));
        assert!(!SubmissionState::Connected.can_transition(&SubmissionInput::Fail));
    }

    #[test]
    fn test_dismiss_from_any_state() {
        for state in [
            SubmissionState::Idle,
            SubmissionState::Submitting,
            SubmissionState::Connected,
            SubmissionState::Failed,
        ] {
            assert_eq!(
                state.transition(&SubmissionInput::Dismiss).unwrap().0,
                SubmissionState::Idle
            );
        }
    }
}
