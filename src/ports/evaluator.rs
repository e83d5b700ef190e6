//! Evaluator port - contract to the external AI evaluation engine.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analysis::{AnalysisRequest, AnalysisResult, InterviewHighlight};

/// Errors surfaced by evaluator adapters.
///
/// No retry is attempted at this level; a failure means the operator must
/// re-trigger the operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluatorError {
    #[error("Evaluator request failed: {0}")]
    Network(String),

    #[error("Evaluator returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Evaluator response could not be decoded: {0}")]
    InvalidResponse(String),

    #[error("Evaluator request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl EvaluatorError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        EvaluatorError::Network(message.into())
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        EvaluatorError::InvalidResponse(message.into())
    }
}

/// The external AI evaluation engine.
///
/// The first round-trip returns the scored report without interviews; the
/// second, keyed to the same request context, yields the interview
/// highlights once synthesis completes.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Submits a team for evaluation, returning the first-phase report.
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResult, EvaluatorError>;

    /// Fetches interview highlights for a previously-submitted context.
    async fn fetch_interviews(
        &self,
        request: &AnalysisRequest,
    ) -> Result<Vec<InterviewHighlight>, EvaluatorError>;
}
