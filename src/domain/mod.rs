//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `team` - Prospect and startup entities plus the team assembly store
//! - `analysis` - Analysis result, submission builder, and session state machine
//! - `profile` - Persisted profile records (separate bounded context)

pub mod analysis;
pub mod foundation;
pub mod profile;
pub mod team;
