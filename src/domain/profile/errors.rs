//! Profile error types

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::RegistryError;

/// Errors from the profile registry workflow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
