//! Mock Evaluator for testing.
//!
//! Configurable implementation of the Evaluator port, allowing the
//! analysis workflow to run without the real evaluation service.
//!
//! # Features
//!
//! - Pre-configured reports and interview batches (consumed in order)
//! - Error injection for failure-path testing
//! - Simulated latency standing in for interview processing time
//! - Call tracking for verification

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::analysis::{AnalysisRequest, AnalysisResult, InterviewHighlight};
use crate::ports::{Evaluator, EvaluatorError};

/// Mock evaluator for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEvaluator {
    /// Queued first-phase responses (consumed in order).
    reports: Arc<Mutex<VecDeque<Result<AnalysisResult, EvaluatorError>>>>,
    /// Queued interview responses (consumed in order).
    interviews: Arc<Mutex<VecDeque<Result<Vec<InterviewHighlight>, EvaluatorError>>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Submitted requests, for verification.
    calls: Arc<Mutex<Vec<AnalysisRequest>>>,
}

impl MockEvaluator {
    /// Creates a new mock with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful first-phase report.
    pub fn with_report(self, report: AnalysisResult) -> Self {
        self.reports.lock().unwrap().push_back(Ok(report));
        self
    }

    /// Queues a failed submission.
    pub fn with_submit_error(self, error: EvaluatorError) -> Self {
        self.reports.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queues a successful interview batch.
    pub fn with_interviews(self, interviews: Vec<InterviewHighlight>) -> Self {
        self.interviews.lock().unwrap().push_back(Ok(interviews));
        self
    }

    /// Queues a failed interview fetch.
    pub fn with_interview_error(self, error: EvaluatorError) -> Self {
        self.interviews.lock().unwrap().push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns all requests submitted so far (both round-trips).
    pub fn calls(&self) -> Vec<AnalysisRequest> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, request: &AnalysisRequest) {
        self.calls.lock().unwrap().push(request.clone());
    }
}

#[async_trait]
impl Evaluator for MockEvaluator {
    async fn submit(&self, request: &AnalysisRequest) -> Result<AnalysisResult, EvaluatorError> {
        self.record_call(request);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.reports
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(EvaluatorError::network("No mock report configured")))
    }

    async fn fetch_interviews(
        &self,
        request: &AnalysisRequest,
    ) -> Result<Vec<InterviewHighlight>, EvaluatorError> {
        self.record_call(request);
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        self.interviews
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(EvaluatorError::network("No mock interviews configured")))
    }
}
