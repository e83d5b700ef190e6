//! ProfileDraft - a profile as submitted to the registry.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Client-side profile data before the registry assigns an id.
///
/// Only `name` is required. Optional fields left empty are omitted from
/// the create payload entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    bio: Option<String>,
}

impl ProfileDraft {
    /// Creates a draft with the required name.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            name,
            email: None,
            linkedin_url: None,
            github_url: None,
            university: None,
            bio: None,
        })
    }

    /// Sets the email address; blank values are dropped.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Self::non_blank(email.into());
        self
    }

    /// Sets the LinkedIn URL; blank values are dropped.
    pub fn with_linkedin_url(mut self, url: impl Into<String>) -> Self {
        self.linkedin_url = Self::non_blank(url.into());
        self
    }

    /// Sets the GitHub URL; blank values are dropped.
    pub fn with_github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = Self::non_blank(url.into());
        self
    }

    /// Sets the university; blank values are dropped.
    pub fn with_university(mut self, university: impl Into<String>) -> Self {
        self.university = Self::non_blank(university.into());
        self
    }

    /// Sets the bio; blank values are dropped.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Self::non_blank(bio.into());
        self
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email, if set.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the LinkedIn URL, if set.
    pub fn linkedin_url(&self) -> Option<&str> {
        self.linkedin_url.as_deref()
    }

    /// Returns the GitHub URL, if set.
    pub fn github_url(&self) -> Option<&str> {
        self.github_url.as_deref()
    }

    /// Returns the university, if set.
    pub fn university(&self) -> Option<&str> {
        self.university.as_deref()
    }

    /// Returns the bio, if set.
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    fn non_blank(value: String) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
