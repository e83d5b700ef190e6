//! AnalysisSession aggregate - one evaluation from submission to final report.

use crate::domain::foundation::{AnalysisSessionId, StateMachine, Timestamp};

use super::{AnalysisError, AnalysisPhase, AnalysisRequest, AnalysisResult, InterviewHighlight};

/// A report field whose rendering is governed by the session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportField {
    OverallScore,
    DisruptionProbability,
    TeamSynergy,
    ComplementaryScore,
    ResearchDepth,
    FounderHighlights,
    InterviewHighlights,
}

/// What the display layer may do with a field at the current phase.
///
/// `Withheld` means the value is computed and held but deliberately
/// obscured from the operator until a later phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVisibility {
    Absent,
    Withheld,
    Visible,
}

/// Per-field display policy for the partial-completion phase.
///
/// The observed behavior withholds overall score, team synergy, and
/// complementary score while showing disruption probability early. No
/// stated business rule distinguishes them, so the withheld set is a
/// policy table rather than hard-coded phase logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPolicy {
    withheld_in_partial: Vec<ReportField>,
}

impl DisplayPolicy {
    /// Creates a policy withholding the given fields during Complete-Partial.
    pub fn withholding(fields: impl Into<Vec<ReportField>>) -> Self {
        Self {
            withheld_in_partial: fields.into(),
        }
    }

    /// Returns true if the field is withheld during Complete-Partial.
    pub fn is_withheld_in_partial(&self, field: ReportField) -> bool {
        self.withheld_in_partial.contains(&field)
    }
}

impl Default for DisplayPolicy {
    fn default() -> Self {
        Self::withholding([
            ReportField::OverallScore,
            ReportField::TeamSynergy,
            ReportField::ComplementaryScore,
        ])
    }
}

/// Tracks a single evaluation's lifecycle and mediates what the display
/// layer may render at each phase.
///
/// # Invariants
///
/// - A result is held exactly when the phase is CompletePartial,
///   RefreshingInterviews, or CompleteFinal
/// - The held result is final exactly when the phase is CompleteFinal
/// - A request snapshot is held from submission onward; the interview
///   round-trip reuses it (the client holds the full context locally)
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    id: AnalysisSessionId,
    phase: AnalysisPhase,
    request: Option<AnalysisRequest>,
    result: Option<AnalysisResult>,
    policy: DisplayPolicy,
    created_at: Timestamp,
}

impl AnalysisSession {
    /// Creates an idle session with the default display policy.
    pub fn new() -> Self {
        Self::with_policy(DisplayPolicy::default())
    }

    /// Creates an idle session with an explicit display policy.
    pub fn with_policy(policy: DisplayPolicy) -> Self {
        Self {
            id: AnalysisSessionId::new(),
            phase: AnalysisPhase::Idle,
            request: None,
            result: None,
            policy,
            created_at: Timestamp::now(),
        }
    }

    /// Returns the session id.
    pub fn id(&self) -> &AnalysisSessionId {
        &self.id
    }

    /// Returns the current phase.
    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    /// Returns the submitted request snapshot, if a submission started.
    pub fn request(&self) -> Option<&AnalysisRequest> {
        self.request.as_ref()
    }

    /// Returns the held report, if one landed.
    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns true if the interview refresh action should be offered.
    ///
    /// False while a refresh is in flight, which is what disables the
    /// triggering action and prevents duplicate requests.
    pub fn interview_refresh_available(&self) -> bool {
        self.phase == AnalysisPhase::CompletePartial
    }

    /// Starts a submission: Idle -> Submitting.
    ///
    /// Stores the request snapshot for the later interview round-trip.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the session is Idle
    pub fn begin_submission(&mut self, request: AnalysisRequest) -> Result<(), AnalysisError> {
        self.transition(AnalysisPhase::Submitting)?;
        self.request = Some(request);
        Ok(())
    }

    /// Records the evaluator's first response: Submitting -> CompletePartial.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless a submission is in flight
    /// - `AlreadyFinal` if the first response already carries interviews
    pub fn complete_submission(&mut self, result: AnalysisResult) -> Result<(), AnalysisError> {
        if result.is_final() {
            return Err(AnalysisError::AlreadyFinal);
        }
        self.transition(AnalysisPhase::CompletePartial)?;
        self.result = Some(result);
        Ok(())
    }

    /// Records a failed submission: Submitting -> Idle.
    ///
    /// No state is retained; the operator must resubmit from scratch.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless a submission is in flight
    pub fn fail_submission(&mut self) -> Result<(), AnalysisError> {
        self.transition(AnalysisPhase::Idle)?;
        self.request = None;
        Ok(())
    }

    /// Starts the interview refresh: CompletePartial -> RefreshingInterviews.
    ///
    /// Returns the held request snapshot so the caller can resubmit the
    /// same context to the evaluator.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the session is CompletePartial
    pub fn begin_interview_refresh(&mut self) -> Result<&AnalysisRequest, AnalysisError> {
        self.transition(AnalysisPhase::RefreshingInterviews)?;
        // A request is always held past Idle; the transition guard above
        // makes the unreachable branch an invariant violation, not a panic.
        self.request
            .as_ref()
            .ok_or(AnalysisError::InvalidTransition {
                from: AnalysisPhase::Idle,
                to: AnalysisPhase::RefreshingInterviews,
            })
    }

    /// Merges interview data: RefreshingInterviews -> CompleteFinal.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless a refresh is in flight
    /// - `AlreadyFinal` if the held report was already finalized
    pub fn complete_interview_refresh(
        &mut self,
        interviews: Vec<InterviewHighlight>,
    ) -> Result<(), AnalysisError> {
        if self.phase != AnalysisPhase::RefreshingInterviews {
            return Err(AnalysisError::InvalidTransition {
                from: self.phase,
                to: AnalysisPhase::CompleteFinal,
            });
        }
        match self.result.as_mut() {
            Some(result) => result.finalize(interviews)?,
            None => {
                return Err(AnalysisError::InvalidTransition {
                    from: self.phase,
                    to: AnalysisPhase::CompleteFinal,
                })
            }
        }
        self.transition(AnalysisPhase::CompleteFinal)
    }

    /// Records a failed refresh: RefreshingInterviews -> CompletePartial.
    ///
    /// The held report survives; the operator may retry.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless a refresh is in flight
    pub fn fail_interview_refresh(&mut self) -> Result<(), AnalysisError> {
        self.transition(AnalysisPhase::CompletePartial)
    }

    /// Returns what the display layer may do with a field right now.
    pub fn visibility(&self, field: ReportField) -> FieldVisibility {
        match self.phase {
            AnalysisPhase::Idle | AnalysisPhase::Submitting => FieldVisibility::Absent,
            AnalysisPhase::CompletePartial | AnalysisPhase::RefreshingInterviews => {
                if field == ReportField::InterviewHighlights {
                    FieldVisibility::Absent
                } else if self.policy.is_withheld_in_partial(field) {
                    FieldVisibility::Withheld
                } else {
                    FieldVisibility::Visible
                }
            }
            AnalysisPhase::CompleteFinal => FieldVisibility::Visible,
        }
    }

    fn transition(&mut self, target: AnalysisPhase) -> Result<(), AnalysisError> {
        if !self.phase.can_transition_to(&target) {
            return Err(AnalysisError::InvalidTransition {
                from: self.phase,
                to: target,
            });
        }
        self.phase = target;
        Ok(())
    }
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}
