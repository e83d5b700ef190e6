//! Evaluator adapters.
//!
//! Implementations of the Evaluator port:
//!
//! - `HttpEvaluator` - the real evaluation service over HTTP
//! - `MockEvaluator` - configurable mock for testing

mod http;
mod mock;

pub use http::HttpEvaluator;
pub use mock::MockEvaluator;
