//! SubmitAnalysisHandler - Command handler for submitting a team for evaluation.

use std::sync::Arc;

use crate::domain::analysis::{AnalysisError, AnalysisRequest, AnalysisSession};
use crate::domain::team::TeamAssembly;
use crate::ports::Evaluator;

/// Handler for the full submission round-trip.
///
/// Builds the request snapshot from the assembled team, drives the session
/// through Submitting, and lands the evaluator's first report.
pub struct SubmitAnalysisHandler {
    evaluator: Arc<dyn Evaluator>,
}

impl SubmitAnalysisHandler {
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self { evaluator }
    }

    /// Submits the assembled team and records the outcome on the session.
    ///
    /// On evaluator failure the session returns to Idle and the error is
    /// propagated; nothing of the failed attempt is retained.
    ///
    /// # Errors
    ///
    /// - `Team(EmptyTeam)` if no prospects are assembled
    /// - `InvalidTransition` unless the session is Idle
    /// - `Evaluator` if the submission itself fails
    pub async fn handle(
        &self,
        session: &mut AnalysisSession,
        team: &TeamAssembly,
    ) -> Result<(), AnalysisError> {
        let request = AnalysisRequest::build(team)?;
        session.begin_submission(request.clone())?;

        tracing::debug!(
            session_id = %session.id(),
            prospects = request.team_list().len(),
            "Submitting team for analysis"
        );

        match self.evaluator.submit(&request).await {
            Ok(result) => session.complete_submission(result),
            Err(e) => {
                tracing::warn!(session_id = %session.id(), error = %e, "Analysis submission failed");
                session.fail_submission()?;
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::evaluator::MockEvaluator;
    use crate::domain::analysis::{AnalysisPhase, AnalysisResult, FounderHighlight, ResearchDepth};
    use crate::domain::foundation::Score;
    use crate::domain::team::{Prospect, TeamError};
    use crate::ports::EvaluatorError;

    fn team() -> TeamAssembly {
        let mut team = TeamAssembly::new();
        team.add_prospect(Prospect::new("Ann", "a@x.com", "https://li/a").unwrap())
            .unwrap();
        team
    }

    fn partial_result() -> AnalysisResult {
        AnalysisResult {
            overall_score: Score::new(7.0).unwrap(),
            disruption_probability: Score::new(6.0).unwrap(),
            team_synergy: Score::new(5.0).unwrap(),
            complementary_score: Score::new(8.0).unwrap(),
            research_depth: ResearchDepth { h_index: 3 },
            founder_highlights: vec![FounderHighlight {
                name: "Ann".into(),
                highlights: vec!["shipped at scale".into()],
                comments: None,
            }],
            interview_highlights: None,
        }
    }

    #[tokio::test]
    async fn successful_submission_lands_partial_report() {
        let evaluator = Arc::new(MockEvaluator::default().with_report(partial_result()));
        let handler = SubmitAnalysisHandler::new(evaluator.clone());
        let mut session = AnalysisSession::new();

        handler.handle(&mut session, &team()).await.unwrap();

        assert_eq!(session.phase(), AnalysisPhase::CompletePartial);
        assert!(session.result().is_some());
        assert_eq!(evaluator.calls().len(), 1);
    }

    #[tokio::test]
    async fn empty_team_fails_before_any_call() {
        let evaluator = Arc::new(MockEvaluator::default());
        let handler = SubmitAnalysisHandler::new(evaluator.clone());
        let mut session = AnalysisSession::new();

        let result = handler.handle(&mut session, &TeamAssembly::new()).await;

        assert!(matches!(result, Err(AnalysisError::Team(TeamError::EmptyTeam))));
        assert_eq!(session.phase(), AnalysisPhase::Idle);
        assert!(evaluator.calls().is_empty());
    }

    #[tokio::test]
    async fn evaluator_failure_returns_session_to_idle() {
        let evaluator = Arc::new(
            MockEvaluator::default().with_submit_error(EvaluatorError::network("down")),
        );
        let handler = SubmitAnalysisHandler::new(evaluator);
        let mut session = AnalysisSession::new();

        let result = handler.handle(&mut session, &team()).await;

        assert!(matches!(result, Err(AnalysisError::Evaluator(_))));
        assert_eq!(session.phase(), AnalysisPhase::Idle);
        assert!(session.request().is_none());
    }

    #[tokio::test]
    async fn resubmission_is_rejected_while_report_held() {
        let evaluator = Arc::new(
            MockEvaluator::default()
                .with_report(partial_result())
                .with_report(partial_result()),
        );
        let handler = SubmitAnalysisHandler::new(evaluator);
        let mut session = AnalysisSession::new();

        handler.handle(&mut session, &team()).await.unwrap();
        let result = handler.handle(&mut session, &team()).await;

        assert!(matches!(result, Err(AnalysisError::InvalidTransition { .. })));
        assert_eq!(session.phase(), AnalysisPhase::CompletePartial);
    }
}
