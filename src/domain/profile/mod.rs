//! Profile module - records persisted in the remote profile registry.
//!
//! Deliberately separate from the team module: ad-hoc registry CRUD and
//! team-assembly prospects are two bounded contexts that share vocabulary
//! but never interoperate.

mod draft;
mod errors;
mod record;

pub use draft::ProfileDraft;
pub use errors::ProfileError;
pub use record::ProfileRecord;
