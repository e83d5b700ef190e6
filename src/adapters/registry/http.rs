//! HTTP Profile Registry - Implementation of the ProfileRegistry port.
//!
//! Talks to the registry service's JSON API. Every response carries a
//! `success` flag; `success: false` with an `error` message maps to
//! [`RegistryError::Rejected`].

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::RegistryConfig;
use crate::domain::foundation::{ProfileId, Timestamp};
use crate::domain::profile::{ProfileDraft, ProfileRecord};
use crate::ports::{ProfileRegistry, RegistryError};

#[derive(Debug, Deserialize)]
struct CreateResponse {
    success: bool,
    #[serde(default)]
    profile_id: Option<String>,
    #[serde(default)]
    created_at: Option<Timestamp>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    success: bool,
    #[serde(default)]
    profiles: Vec<ProfileRecord>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeleteResponse {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Profile registry service client.
pub struct HttpProfileRegistry {
    config: RegistryConfig,
    client: Client,
}

impl HttpProfileRegistry {
    /// Creates a new registry client with the given configuration.
    pub fn new(config: RegistryConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn profile_url(&self) -> String {
        format!("{}/api/profile", self.config.base_url)
    }

    fn profiles_url(&self) -> String {
        format!("{}/api/profiles", self.config.base_url)
    }

    fn profile_item_url(&self, id: &ProfileId) -> String {
        format!("{}/api/profile/{}", self.config.base_url, id)
    }

    fn map_send_error(e: reqwest::Error) -> RegistryError {
        if e.is_connect() {
            RegistryError::network(format!("Connection failed: {}", e))
        } else {
            RegistryError::network(e.to_string())
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RegistryError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(RegistryError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn rejection(error: Option<String>) -> RegistryError {
        RegistryError::rejected(error.unwrap_or_else(|| "Unknown error".to_string()))
    }
}

#[async_trait]
impl ProfileRegistry for HttpProfileRegistry {
    async fn create(&self, draft: &ProfileDraft) -> Result<ProfileRecord, RegistryError> {
        tracing::debug!(name = draft.name(), "Creating profile");

        let response = self
            .client
            .post(self.profile_url())
            .header("Content-Type", "application/json")
            .json(draft)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let body: CreateResponse = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| RegistryError::invalid_response(e.to_string()))?;

        if !body.success {
            return Err(Self::rejection(body.error));
        }

        let profile_id = body
            .profile_id
            .ok_or_else(|| RegistryError::invalid_response("Missing profile_id"))
            .and_then(|id| {
                ProfileId::new(id).map_err(|e| RegistryError::invalid_response(e.to_string()))
            })?;

        Ok(ProfileRecord {
            profile_id,
            name: draft.name().to_string(),
            email: draft.email().map(str::to_string),
            linkedin_url: draft.linkedin_url().map(str::to_string),
            github_url: draft.github_url().map(str::to_string),
            university: draft.university().map(str::to_string),
            bio: draft.bio().map(str::to_string),
            created_at: body.created_at.unwrap_or_else(Timestamp::now),
        })
    }

    async fn list(&self) -> Result<Vec<ProfileRecord>, RegistryError> {
        let response = self
            .client
            .get(self.profiles_url())
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let body: ListResponse = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| RegistryError::invalid_response(e.to_string()))?;

        if !body.success {
            return Err(Self::rejection(body.error));
        }

        tracing::debug!(count = body.profiles.len(), "Listed profiles");
        Ok(body.profiles)
    }

    async fn delete(&self, id: &ProfileId) -> Result<(), RegistryError> {
        tracing::debug!(profile_id = %id, "Deleting profile");

        let response = self
            .client
            .delete(self.profile_item_url(id))
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let body: DeleteResponse = Self::check_status(response)
            .await?
            .json()
            .await
            .map_err(|e| RegistryError::invalid_response(e.to_string()))?;

        if !body.success {
            return Err(Self::rejection(body.error));
        }

        Ok(())
    }
}
