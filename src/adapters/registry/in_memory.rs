//! In-memory Profile Registry - Test double for the ProfileRegistry port.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{ProfileId, Timestamp};
use crate::domain::profile::{ProfileDraft, ProfileRecord};
use crate::ports::{ProfileRegistry, RegistryError};

/// Stores profiles in a process-local map, assigning sequential ids.
#[derive(Default)]
pub struct InMemoryProfileRegistry {
    profiles: Mutex<HashMap<String, ProfileRecord>>,
    next_id: Mutex<u64>,
}

impl InMemoryProfileRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored profiles.
    pub fn len(&self) -> usize {
        self.profiles.lock().unwrap().len()
    }

    /// Returns true when no profiles are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn allocate_id(&self) -> ProfileId {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        ProfileId::new(format!("profile-{}", *next)).expect("generated id is non-empty")
    }
}

#[async_trait]
impl ProfileRegistry for InMemoryProfileRegistry {
    async fn create(&self, draft: &ProfileDraft) -> Result<ProfileRecord, RegistryError> {
        let record = ProfileRecord {
            profile_id: self.allocate_id(),
            name: draft.name().to_string(),
            email: draft.email().map(str::to_string),
            linkedin_url: draft.linkedin_url().map(str::to_string),
            github_url: draft.github_url().map(str::to_string),
            university: draft.university().map(str::to_string),
            bio: draft.bio().map(str::to_string),
            created_at: Timestamp::now(),
        };

        self.profiles
            .lock()
            .unwrap()
            .insert(record.profile_id.as_str().to_string(), record.clone());

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<ProfileRecord>, RegistryError> {
        let mut records: Vec<ProfileRecord> =
            self.profiles.lock().unwrap().values().cloned().collect();
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(records)
    }

    async fn delete(&self, id: &ProfileId) -> Result<(), RegistryError> {
        let removed = self.profiles.lock().unwrap().remove(id.as_str());
        if removed.is_none() {
            return Err(RegistryError::rejected(format!(
                "Profile not found: {}",
                id
            )));
        }
        Ok(())
    }
}
