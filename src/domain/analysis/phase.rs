//! AnalysisPhase enum for tracking the lifecycle of an evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle phase of an analysis session.
///
/// Valid transitions:
///
/// - Idle -> Submitting (request in flight)
/// - Submitting -> CompletePartial (scores landed, interviews pending)
/// - Submitting -> Idle (submission failed; operator must resubmit)
/// - CompletePartial -> RefreshingInterviews (operator requested refresh)
/// - RefreshingInterviews -> CompleteFinal (interviews merged; terminal)
/// - RefreshingInterviews -> CompletePartial (refresh failed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisPhase {
    #[default]
    Idle,
    Submitting,
    CompletePartial,
    RefreshingInterviews,
    CompleteFinal,
}

impl StateMachine for AnalysisPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AnalysisPhase::*;
        matches!(
            (self, target),
            (Idle, Submitting)
                | (Submitting, CompletePartial)
                | (Submitting, Idle)
                | (CompletePartial, RefreshingInterviews)
                | (RefreshingInterviews, CompleteFinal)
                | (RefreshingInterviews, CompletePartial)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AnalysisPhase::*;
        match self {
            Idle => vec![Submitting],
            Submitting => vec![CompletePartial, Idle],
            CompletePartial => vec![RefreshingInterviews],
            RefreshingInterviews => vec![CompleteFinal, CompletePartial],
            CompleteFinal => vec![],
        }
    }
}

impl AnalysisPhase {
    /// Returns true if a request is in flight for this phase.
    ///
    /// The triggering action must be disabled while in flight to prevent
    /// duplicate concurrent requests for the same transition.
    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            AnalysisPhase::Submitting | AnalysisPhase::RefreshingInterviews
        )
    }
}

impl fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnalysisPhase::Idle => "Idle",
            AnalysisPhase::Submitting => "Submitting",
            AnalysisPhase::CompletePartial => "Complete-Partial",
            AnalysisPhase::RefreshingInterviews => "Refreshing-Interviews",
            AnalysisPhase::CompleteFinal => "Complete-Final",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AnalysisPhase; 5] = [
        AnalysisPhase::Idle,
        AnalysisPhase::Submitting,
        AnalysisPhase::CompletePartial,
        AnalysisPhase::RefreshingInterviews,
        AnalysisPhase::CompleteFinal,
    ];

    #[test]
    fn default_is_idle() {
        assert_eq!(AnalysisPhase::default(), AnalysisPhase::Idle);
    }

    #[test]
    fn complete_final_is_terminal() {
        assert!(AnalysisPhase::CompleteFinal.is_terminal());
        for phase in ALL.iter().filter(|p| **p != AnalysisPhase::CompleteFinal) {
            assert!(!phase.is_terminal(), "{} should not be terminal", phase);
        }
    }

    #[test]
    fn refreshing_is_only_reachable_from_complete_partial() {
        for phase in ALL {
            let reachable = phase.can_transition_to(&AnalysisPhase::RefreshingInterviews);
            assert_eq!(
                reachable,
                phase == AnalysisPhase::CompletePartial,
                "unexpected transition {} -> Refreshing-Interviews",
                phase
            );
        }
    }

    #[test]
    fn complete_partial_is_only_reachable_from_submitting_or_refresh_failure() {
        for phase in ALL {
            let reachable = phase.can_transition_to(&AnalysisPhase::CompletePartial);
            let expected = matches!(
                phase,
                AnalysisPhase::Submitting | AnalysisPhase::RefreshingInterviews
            );
            assert_eq!(reachable, expected);
        }
    }

    #[test]
    fn failed_submission_returns_to_idle() {
        assert!(AnalysisPhase::Submitting.can_transition_to(&AnalysisPhase::Idle));
        assert!(!AnalysisPhase::CompletePartial.can_transition_to(&AnalysisPhase::Idle));
    }

    #[test]
    fn in_flight_phases_match_suspension_points() {
        assert!(AnalysisPhase::Submitting.is_in_flight());
        assert!(AnalysisPhase::RefreshingInterviews.is_in_flight());
        assert!(!AnalysisPhase::Idle.is_in_flight());
        assert!(!AnalysisPhase::CompletePartial.is_in_flight());
        assert!(!AnalysisPhase::CompleteFinal.is_in_flight());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for phase in ALL {
            for target in phase.valid_transitions() {
                assert!(phase.can_transition_to(&target));
            }
            let listed = phase.valid_transitions();
            for target in ALL {
                if phase.can_transition_to(&target) {
                    assert!(listed.contains(&target));
                }
            }
        }
    }
}
