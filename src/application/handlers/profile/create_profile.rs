//! CreateProfileHandler - Command handler for saving a profile to the registry.

use std::sync::Arc;

use crate::domain::profile::{ProfileDraft, ProfileError, ProfileRecord};
use crate::ports::ProfileRegistry;

/// Command to create a profile. Only `name` is required; blank optional
/// fields are dropped before the registry sees them.
#[derive(Debug, Clone, Default)]
pub struct CreateProfileCommand {
    pub name: String,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub university: Option<String>,
    pub bio: Option<String>,
}

/// Handler for creating registry profiles.
pub struct CreateProfileHandler {
    registry: Arc<dyn ProfileRegistry>,
}

impl CreateProfileHandler {
    pub fn new(registry: Arc<dyn ProfileRegistry>) -> Self {
        Self { registry }
    }

    /// Validates the command and stores the profile.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is blank
    /// - `Registry` if the registry rejects or the request fails
    pub async fn handle(&self, cmd: CreateProfileCommand) -> Result<ProfileRecord, ProfileError> {
        let mut draft = ProfileDraft::new(cmd.name)?;
        if let Some(email) = cmd.email {
            draft = draft.with_email(email);
        }
        if let Some(url) = cmd.linkedin_url {
            draft = draft.with_linkedin_url(url);
        }
        if let Some(url) = cmd.github_url {
            draft = draft.with_github_url(url);
        }
        if let Some(university) = cmd.university {
            draft = draft.with_university(university);
        }
        if let Some(bio) = cmd.bio {
            draft = draft.with_bio(bio);
        }

        let record = self.registry.create(&draft).await?;
        tracing::debug!(profile_id = %record.profile_id, "Profile created");
        Ok(record)
    }
}
