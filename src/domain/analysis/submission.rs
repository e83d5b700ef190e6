//! Submission builder - the exact payload sent to the external evaluator.

use serde::{Deserialize, Serialize};

use crate::domain::team::{Prospect, StartupInfo, TeamAssembly, TeamError};

/// Immutable snapshot of a team assembly at the moment of submission.
///
/// The wire shape matches the evaluator contract: `startupInfo` plus the
/// full ordered `teamList`. Prospects are never mutated after being
/// embedded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    startup_info: Option<StartupInfo>,
    team_list: Vec<Prospect>,
}

impl AnalysisRequest {
    /// Builds a request from the current team assembly state.
    ///
    /// Does not mutate the store; starting a session is a caller concern.
    ///
    /// # Errors
    ///
    /// - `EmptyTeam` if no prospect exists. Callers are expected to gate
    ///   the submission action on [`TeamAssembly::has_prospects`]; this is
    ///   the backstop.
    pub fn build(team: &TeamAssembly) -> Result<Self, TeamError> {
        if !team.has_prospects() {
            return Err(TeamError::EmptyTeam);
        }
        Ok(Self {
            startup_info: team.startup_info().cloned(),
            team_list: team.prospects().to_vec(),
        })
    }

    /// Returns the embedded startup record, if one was ever saved.
    pub fn startup_info(&self) -> Option<&StartupInfo> {
        self.startup_info.as_ref()
    }

    /// Returns the ordered list of prospects under evaluation.
    pub fn team_list(&self) -> &[Prospect] {
        &self.team_list
    }
}
