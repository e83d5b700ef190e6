//! AnalysisResult - the evaluator's report on a submitted team.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Score;

use super::AnalysisError;

/// Research footprint metrics extracted for the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchDepth {
    /// Aggregate h-index across evaluated prospects.
    pub h_index: u32,
}

/// Per-founder findings from the research phase.
///
/// Entries mirror submission order, one per evaluated prospect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderHighlight {
    pub name: String,
    pub highlights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comments: Option<String>,
}

/// A synthesized interview exchange for one team member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewHighlight {
    pub question: String,
    pub summary: String,
    pub key_insights: Vec<String>,
    pub score: Score,
    pub person: String,
}

/// The evaluator's report.
///
/// Created once by the first response; refined in place exactly once when
/// the interview round-trip completes. `interview_highlights` is the only
/// field whose presence distinguishes a partial report from a final one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: Score,
    pub disruption_probability: Score,
    pub team_synergy: Score,
    pub complementary_score: Score,
    pub research_depth: ResearchDepth,
    pub founder_highlights: Vec<FounderHighlight>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub interview_highlights: Option<Vec<InterviewHighlight>>,
}

impl AnalysisResult {
    /// Returns true once interview highlights are present.
    pub fn is_final(&self) -> bool {
        self.interview_highlights.is_some()
    }

    /// Merges interview highlights into the report, finalizing it.
    ///
    /// An explicitly empty sequence still counts as final.
    ///
    /// # Errors
    ///
    /// - `AlreadyFinal` if interviews were already merged
    pub fn finalize(&mut self, interviews: Vec<InterviewHighlight>) -> Result<(), AnalysisError> {
        if self.is_final() {
            return Err(AnalysisError::AlreadyFinal);
        }
        self.interview_highlights = Some(interviews);
        Ok(())
    }
}
