//! HTTP Evaluator - Implementation of the Evaluator port over HTTP.
//!
//! Talks to the evaluation service's JSON API. The first-phase report
//! comes back from `POST /api/analyse`; interview highlights come from
//! `POST /api/interviews` with the same request context, after waiting
//! out the configured interview-processing delay.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tokio::time::sleep;

use crate::config::EvaluatorConfig;
use crate::domain::analysis::{AnalysisRequest, AnalysisResult, InterviewHighlight};
use crate::ports::{Evaluator, EvaluatorError};

/// Request envelope expected by the evaluation service.
#[derive(Debug, Serialize)]
struct AnalysisEnvelope<'a> {
    data: &'a AnalysisRequest,
}

/// Second-phase response carrying only the interview highlights.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InterviewsResponse {
    interview_highlights: Vec<InterviewHighlight>,
}

/// Evaluation service client.
pub struct HttpEvaluator {
    config: EvaluatorConfig,
    client: Client,
}

impl HttpEvaluator {
    /// Creates a new evaluator client with the given configuration.
    pub fn new(config: EvaluatorConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn analyse_url(&self) -> String {
        format!("{}/api/analyse", self.config.base_url)
    }

    fn interviews_url(&self) -> String {
        format!("{}/api/interviews", self.config.base_url)
    }

    async fn post_envelope(
        &self,
        url: String,
        request: &AnalysisRequest,
    ) -> Result<Response, EvaluatorError> {
        let envelope = AnalysisEnvelope { data: request };

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&envelope)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EvaluatorError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else if e.is_connect() {
                    EvaluatorError::network(format!("Connection failed: {}", e))
                } else {
                    EvaluatorError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "Evaluator returned error status");
            return Err(EvaluatorError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl Evaluator for HttpEvaluator {
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResult, EvaluatorError> {
        tracing::debug!(
            team_size = request.team_list().len(),
            has_startup_info = request.startup_info().is_some(),
            "Submitting team for analysis"
        );

        let response = self.post_envelope(self.analyse_url(), request).await?;
        let result: AnalysisResult = response
            .json()
            .await
            .map_err(|e| EvaluatorError::invalid_response(e.to_string()))?;

        tracing::debug!("Received first-phase analysis report");
        Ok(result)
    }

    async fn fetch_interviews(
        &self,
        request: &AnalysisRequest,
    ) -> Result<Vec<InterviewHighlight>, EvaluatorError> {
        // The evaluator's slow path has no completion callback; waiting out
        // the configured processing delay before polling stands in for one.
        sleep(self.config.interview_poll_delay()).await;

        let response = self.post_envelope(self.interviews_url(), request).await?;
        let interviews: InterviewsResponse = response
            .json()
            .await
            .map_err(|e| EvaluatorError::invalid_response(e.to_string()))?;

        tracing::debug!(
            count = interviews.interview_highlights.len(),
            "Received interview highlights"
        );
        Ok(interviews.interview_highlights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::{Prospect, StartupInfo, TeamAssembly};

    #[test]
    fn envelope_nests_request_under_data_key() {
        let mut team = TeamAssembly::new();
        team.set_startup_info(StartupInfo::manual("T", "p", "2024", "m", "b").unwrap());
        team.add_prospect(Prospect::new("Ann", "a@x.com", "https://li/a").unwrap())
            .unwrap();
        let request = AnalysisRequest::build(&team).unwrap();

        let json = serde_json::to_value(AnalysisEnvelope { data: &request }).unwrap();
        assert!(json["data"]["startupInfo"].is_object());
        assert_eq!(json["data"]["teamList"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"]["teamList"][0]["name"], "Ann");
    }

    #[test]
    fn urls_are_built_from_configured_base() {
        let config = EvaluatorConfig {
            base_url: "http://evaluator:9000".into(),
            ..EvaluatorConfig::default()
        };
        let evaluator = HttpEvaluator::new(config);
        assert_eq!(evaluator.analyse_url(), "http://evaluator:9000/api/analyse");
        assert_eq!(
            evaluator.interviews_url(),
            "http://evaluator:9000/api/interviews"
        );
    }
}
