//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the TeamLens domain.

mod errors;
mod ids;
mod score;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{AnalysisSessionId, ProfileId, ProspectId};
pub use score::Score;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
