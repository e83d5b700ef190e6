//! Error types for the analysis module.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::team::TeamError;
use crate::ports::EvaluatorError;

use super::AnalysisPhase;

/// Errors raised while driving an analysis session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Invalid session transition from {from} to {to}")]
    InvalidTransition {
        from: AnalysisPhase,
        to: AnalysisPhase,
    },

    #[error("Analysis result already contains interview highlights")]
    AlreadyFinal,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Team(#[from] TeamError),

    #[error(transparent)]
    Evaluator(#[from] EvaluatorError),
}
