//! StartupInfo entity - descriptive metadata about the startup under evaluation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Reference to an uploaded pitch deck document.
///
/// Content extraction is an external concern; the workflow only tracks
/// that a document was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchDeck {
    file_name: String,
    #[serde(skip)]
    content: Vec<u8>,
}

impl PitchDeck {
    /// Creates a pitch deck reference.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the file name is blank
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Result<Self, ValidationError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(ValidationError::empty_field("file_name"));
        }
        Ok(Self { file_name, content })
    }

    /// Returns the original file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the document bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// Startup metadata, either entered manually or derived from a pitch deck.
///
/// # Invariants
///
/// - When `is_manual`, the five text fields are authoritative and non-empty
/// - When not manual, a pitch deck reference is present instead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupInfo {
    name: String,
    product: String,
    founded: String,
    mission: String,
    business_model: String,
    is_manual: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pitch_deck: Option<PitchDeck>,
}

impl StartupInfo {
    /// Create a manually-entered startup record.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if any of the five text fields is blank after trimming
    pub fn manual(
        name: impl Into<String>,
        product: impl Into<String>,
        founded: impl Into<String>,
        mission: impl Into<String>,
        business_model: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let info = Self {
            name: name.into(),
            product: product.into(),
            founded: founded.into(),
            mission: mission.into(),
            business_model: business_model.into(),
            is_manual: true,
            pitch_deck: None,
        };

        for (value, field) in [
            (&info.name, "name"),
            (&info.product, "product"),
            (&info.founded, "founded"),
            (&info.mission, "mission"),
            (&info.business_model, "business_model"),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::empty_field(field));
            }
        }

        Ok(info)
    }

    /// Create a record backed by an uploaded pitch deck.
    ///
    /// The text fields stay empty; extraction happens downstream.
    pub fn from_pitch_deck(deck: PitchDeck) -> Self {
        Self {
            name: String::new(),
            product: String::new(),
            founded: String::new(),
            mission: String::new(),
            business_model: String::new(),
            is_manual: false,
            pitch_deck: Some(deck),
        }
    }

    /// Returns the startup name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product description.
    pub fn product(&self) -> &str {
        &self.product
    }

    /// Returns the founding year as entered.
    pub fn founded(&self) -> &str {
        &self.founded
    }

    /// Returns the mission statement.
    pub fn mission(&self) -> &str {
        &self.mission
    }

    /// Returns the business model description.
    pub fn business_model(&self) -> &str {
        &self.business_model
    }

    /// Returns true if the record was entered manually.
    pub fn is_manual(&self) -> bool {
        self.is_manual
    }

    /// Returns the pitch deck reference, if any.
    pub fn pitch_deck(&self) -> Option<&PitchDeck> {
        self.pitch_deck.as_ref()
    }

    /// Returns true if the record satisfies its acquisition-mode invariant.
    pub fn is_valid(&self) -> bool {
        if self.is_manual {
            [
                &self.name,
                &self.product,
                &self.founded,
                &self.mission,
                &self.business_model,
            ]
            .iter()
            .all(|v| !v.trim().is_empty())
        } else {
            self.pitch_deck.is_some()
        }
    }
}
