//! ProfileRecord - a profile as stored in the remote registry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProfileId, Timestamp};

/// A persisted profile, including the registry-assigned id and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub profile_id: ProfileId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub bio: Option<String>,
    pub created_at: Timestamp,
}
