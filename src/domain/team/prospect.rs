//! Prospect entity - a candidate team member under evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProspectId, ValidationError};

/// Reference list of known institutions offered when capturing a prospect.
///
/// The entity itself accepts arbitrary text; this list only feeds
/// selection UIs and importers.
pub const TOP_UNIVERSITIES: &[&str] = &[
    "Harvard University",
    "Stanford University",
    "Massachusetts Institute of Technology",
    "Max Planck Institute for Molecular Genetics",
    "Universidade de São Paulo",
    "University of Cambridge",
    "University of Oxford",
    "California Institute of Technology",
    "University of Chicago",
    "Princeton University",
    "Yale University",
    "Columbia University",
    "University of Pennsylvania",
    "Cornell University",
    "University of California Berkeley",
    "University of California Los Angeles",
    "University of Michigan",
    "New York University",
    "London School of Economics",
    "Imperial College London",
    "University College London",
    "Carnegie Mellon University",
    "Northwestern University",
    "Johns Hopkins University",
    "Duke University",
    "University of Toronto",
    "University of Edinburgh",
    "King's College London",
    "University of Melbourne",
    "University of Sydney",
    "Australian National University",
    "University of British Columbia",
    "McGill University",
    "University of Tokyo",
    "Kyoto University",
    "National University of Singapore",
    "Nanyang Technological University",
    "Peking University",
    "Tsinghua University",
    "ETH Zurich",
    "Sorbonne University",
    "Sciences Po",
    "Technical University of Munich",
    "University of Amsterdam",
    "Delft University of Technology",
    "KTH Royal Institute",
    "Stockholm School of Economics",
    "INSEAD",
    "London Business School",
    "IESE Business School",
];

/// A candidate team member under evaluation.
///
/// # Invariants
///
/// - `name`, `email`, and `linkedin` are non-empty after trimming
/// - `id` is unique within a [`super::TeamAssembly`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prospect {
    id: ProspectId,
    name: String,
    email: String,
    linkedin: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    notes: Option<String>,
}

impl Prospect {
    /// Create a new prospect with a fresh id.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name, email, or linkedin is blank after trimming
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        linkedin: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let email = email.into();
        let linkedin = linkedin.into();

        Self::required(&name, "name")?;
        Self::required(&email, "email")?;
        Self::required(&linkedin, "linkedin")?;

        Ok(Self {
            id: ProspectId::new(),
            name,
            email,
            linkedin,
            github: None,
            university: None,
            notes: None,
        })
    }

    /// Sets the GitHub URL.
    pub fn with_github(mut self, github: impl Into<String>) -> Self {
        self.github = Some(github.into());
        self
    }

    /// Sets the university.
    pub fn with_university(mut self, university: impl Into<String>) -> Self {
        self.university = Some(university.into());
        self
    }

    /// Sets the free-text notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns the prospect id.
    pub fn id(&self) -> &ProspectId {
        &self.id
    }

    /// Returns the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the LinkedIn URL.
    pub fn linkedin(&self) -> &str {
        &self.linkedin
    }

    /// Returns the GitHub URL, if any.
    pub fn github(&self) -> Option<&str> {
        self.github.as_deref()
    }

    /// Returns the university, if any.
    pub fn university(&self) -> Option<&str> {
        self.university.as_deref()
    }

    /// Returns the notes, if any.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns true if all required fields are non-empty after trimming.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.linkedin.trim().is_empty()
    }

    fn required(value: &str, field: &'static str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            Err(ValidationError::empty_field(field))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_prospect_assigns_fresh_id() {
        let a = Prospect::new("Ann", "a@x.com", "https://li/a").unwrap();
        let b = Prospect::new("Ben", "b@x.com", "https://li/b").unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn new_prospect_rejects_blank_required_fields() {
        assert!(Prospect::new("", "a@x.com", "https://li/a").is_err());
        assert!(Prospect::new("Ann", "   ", "https://li/a").is_err());
        assert!(Prospect::new("Ann", "a@x.com", "").is_err());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let p = Prospect::new("Ann", "a@x.com", "https://li/a").unwrap();
        assert!(p.github().is_none());
        assert!(p.university().is_none());
        assert!(p.notes().is_none());
    }

    #[test]
    fn builder_setters_populate_optional_fields() {
        let p = Prospect::new("Ann", "a@x.com", "https://li/a")
            .unwrap()
            .with_github("https://github.com/ann")
            .with_university("Stanford University")
            .with_notes("AI/ML expert");
        assert_eq!(p.github(), Some("https://github.com/ann"));
        assert_eq!(p.university(), Some("Stanford University"));
        assert_eq!(p.notes(), Some("AI/ML expert"));
    }

    #[test]
    fn university_accepts_text_outside_reference_list() {
        let p = Prospect::new("Ann", "a@x.com", "https://li/a")
            .unwrap()
            .with_university("Unknown College");
        assert_eq!(p.university(), Some("Unknown College"));
        assert!(!TOP_UNIVERSITIES.contains(&"Unknown College"));
    }

    #[test]
    fn is_valid_matches_required_field_presence() {
        let p = Prospect::new("Ann", "a@x.com", "https://li/a").unwrap();
        assert!(p.is_valid());
    }

    #[test]
    fn serializes_without_absent_optional_fields() {
        let p = Prospect::new("Ann", "a@x.com", "https://li/a").unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("github").is_none());
        assert_eq!(json["name"], "Ann");
        assert_eq!(json["linkedin"], "https://li/a");
    }
}
