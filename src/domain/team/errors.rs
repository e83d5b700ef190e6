//! Error types for the team module.

use thiserror::Error;

use crate::domain::foundation::{ProspectId, ValidationError};

/// Errors raised by the team assembly store and submission builder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TeamError {
    #[error("Prospect {0} is already in the team")]
    DuplicateProspect(ProspectId),

    #[error("Cannot build a submission from an empty team")]
    EmptyTeam,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
