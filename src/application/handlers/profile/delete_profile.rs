//! DeleteProfileHandler - Command handler for removing a profile from the registry.

use std::sync::Arc;

use crate::domain::foundation::ProfileId;
use crate::domain::profile::ProfileError;
use crate::ports::ProfileRegistry;

/// Handler for deleting registry profiles.
pub struct DeleteProfileHandler {
    registry: Arc<dyn ProfileRegistry>,
}

impl DeleteProfileHandler {
    pub fn new(registry: Arc<dyn ProfileRegistry>) -> Self {
        Self { registry }
    }

    /// Deletes the profile with the given id.
    ///
    /// # Errors
    ///
    /// - `Registry` if the registry rejects the id or the request fails
    pub async fn handle(&self, id: &ProfileId) -> Result<(), ProfileError> {
        self.registry.delete(id).await?;
        tracing::debug!(profile_id = %id, "Profile deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::registry::InMemoryProfileRegistry;
    use crate::domain::profile::ProfileDraft;
    use crate::ports::RegistryError;

    #[tokio::test]
    async fn deletes_existing_profile() {
        let registry = Arc::new(InMemoryProfileRegistry::new());
        let record = registry
            .create(&ProfileDraft::new("Ann").unwrap())
            .await
            .unwrap();

        let handler = DeleteProfileHandler::new(registry.clone());
        handler.handle(&record.profile_id).await.unwrap();

        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn unknown_id_surfaces_rejection() {
        let handler = DeleteProfileHandler::new(Arc::new(InMemoryProfileRegistry::new()));
        let id = ProfileId::new("missing").unwrap();

        let result = handler.handle(&id).await;
        assert!(matches!(
            result,
            Err(ProfileError::Registry(RegistryError::Rejected(_)))
        ));
    }
}
