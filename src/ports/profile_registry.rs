//! ProfileRegistry port - contract to the remote persisted-profile service.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::ProfileId;
use crate::domain::profile::{ProfileDraft, ProfileRecord};

/// Errors surfaced by profile registry adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Registry request failed: {0}")]
    Network(String),

    #[error("Registry returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Registry rejected the request: {0}")]
    Rejected(String),

    #[error("Registry response could not be decoded: {0}")]
    InvalidResponse(String),
}

impl RegistryError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        RegistryError::Network(message.into())
    }

    /// Creates a rejection error from the registry's error field.
    pub fn rejected(message: impl Into<String>) -> Self {
        RegistryError::Rejected(message.into())
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse(message.into())
    }
}

/// The remote persisted-profile collection.
#[async_trait]
pub trait ProfileRegistry: Send + Sync {
    /// Creates a profile, returning the stored record with its assigned id.
    async fn create(&self, draft: &ProfileDraft) -> Result<ProfileRecord, RegistryError>;

    /// Lists all stored profiles.
    async fn list(&self) -> Result<Vec<ProfileRecord>, RegistryError>;

    /// Deletes the profile with the given id.
    async fn delete(&self, id: &ProfileId) -> Result<(), RegistryError>;
}
