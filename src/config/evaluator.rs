//! Evaluator service configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Analysis evaluator service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluatorConfig {
    /// Base URL of the evaluator service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Delay before polling for interview results, in seconds
    #[serde(default = "default_interview_poll_delay")]
    pub interview_poll_delay_secs: u64,
}

impl EvaluatorConfig {
    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get interview poll delay as Duration
    pub fn interview_poll_delay(&self) -> Duration {
        Duration::from_secs(self.interview_poll_delay_secs)
    }

    /// Validate evaluator configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("EVALUATOR_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl("evaluator"));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            interview_poll_delay_secs: default_interview_poll_delay(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_interview_poll_delay() -> u64 {
    9
}
