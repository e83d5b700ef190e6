//! Analysis handlers - the two evaluator round-trips.

mod refresh_interviews;
mod submit_analysis;

pub use refresh_interviews::RefreshInterviewsHandler;
pub use submit_analysis::SubmitAnalysisHandler;
