//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analysis;
pub mod profile;

pub use analysis::{RefreshInterviewsHandler, SubmitAnalysisHandler};
pub use profile::{
    CreateProfileCommand, CreateProfileHandler, DeleteProfileHandler, ListProfilesHandler,
};
