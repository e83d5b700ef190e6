//! Analysis module - evaluation request, report, and session lifecycle.
//!
//! The [`AnalysisSession`] state machine is the heart of the workflow: it
//! tracks one evaluation from submission through partial availability
//! (scores present, interviews pending) to final completion, and decides
//! which report fields the display layer may render at each phase.

mod errors;
mod phase;
mod result;
mod session;
mod submission;

pub use errors::AnalysisError;
pub use phase::AnalysisPhase;
pub use result::{AnalysisResult, FounderHighlight, InterviewHighlight, ResearchDepth};
pub use session::{AnalysisSession, DisplayPolicy, FieldVisibility, ReportField};
pub use submission::AnalysisRequest;
