//! RefreshInterviewsHandler - Command handler for the second evaluation round-trip.

use std::sync::Arc;

use crate::domain::analysis::{AnalysisError, AnalysisSession};
use crate::ports::Evaluator;

/// Handler for fetching interview highlights into a held partial report.
///
/// Resubmits the session's original request snapshot; the evaluator needs
/// the same team context to produce matching interviews.
pub struct RefreshInterviewsHandler {
    evaluator: Arc<dyn Evaluator>,
}

impl RefreshInterviewsHandler {
    pub fn new(evaluator: Arc<dyn Evaluator>) -> Self {
        Self { evaluator }
    }

    /// Fetches interviews and finalizes the session's report.
    ///
    /// On evaluator failure the session returns to Complete-Partial with
    /// the held report intact, so the operator may retry.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the session is Complete-Partial
    /// - `Evaluator` if the fetch fails
    pub async fn handle(&self, session: &mut AnalysisSession) -> Result<(), AnalysisError> {
        let request = session.begin_interview_refresh()?.clone();

        tracing::debug!(session_id = %session.id(), "Refreshing interview highlights");

        match self.evaluator.fetch_interviews(&request).await {
            Ok(interviews) => session.complete_interview_refresh(interviews),
            Err(e) => {
                tracing::warn!(session_id = %session.id(), error = %e, "Interview refresh failed");
                session.fail_interview_refresh()?;
                Err(e.into())
            }
        }
    }
}
