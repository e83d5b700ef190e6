//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Evaluator` - the external AI evaluation engine
//! - `ProfileRegistry` - the remote persisted-profile collection

mod evaluator;
mod profile_registry;

pub use evaluator::{Evaluator, EvaluatorError};
pub use profile_registry::{ProfileRegistry, RegistryError};
