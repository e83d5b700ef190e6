//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//!
//! - `evaluator` - HTTP client for the AI evaluation engine, plus a
//!   configurable mock for testing
//! - `registry` - HTTP client for the profile registry, plus an
//!   in-memory implementation for testing

pub mod evaluator;
pub mod registry;
