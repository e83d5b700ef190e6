//! ListProfilesHandler - Query handler for the stored profile collection.

use std::sync::Arc;

use crate::domain::profile::{ProfileError, ProfileRecord};
use crate::ports::ProfileRegistry;

/// Handler for listing registry profiles.
pub struct ListProfilesHandler {
    registry: Arc<dyn ProfileRegistry>,
}

impl ListProfilesHandler {
    pub fn new(registry: Arc<dyn ProfileRegistry>) -> Self {
        Self { registry }
    }

    /// Fetches every stored profile.
    ///
    /// # Errors
    ///
    /// - `Registry` if the request fails
    pub async fn handle(&self) -> Result<Vec<ProfileRecord>, ProfileError> {
        Ok(self.registry.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::registry::InMemoryProfileRegistry;
    use crate::domain::profile::ProfileDraft;

    #[tokio::test]
    async fn lists_stored_profiles() {
        let registry = Arc::new(InMemoryProfileRegistry::new());
        registry
            .create(&ProfileDraft::new("Ann").unwrap())
            .await
            .unwrap();
        registry
            .create(&ProfileDraft::new("Bob").unwrap())
            .await
            .unwrap();

        let handler = ListProfilesHandler::new(registry);
        let profiles = handler.handle().await.unwrap();

        assert_eq!(profiles.len(), 2);
    }

    #[tokio::test]
    async fn empty_registry_lists_nothing() {
        let handler = ListProfilesHandler::new(Arc::new(InMemoryProfileRegistry::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }
}
