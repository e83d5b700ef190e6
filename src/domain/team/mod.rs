//! Team module - Working set the operator builds toward a submission.
//!
//! Holds the prospect and startup entities plus the [`TeamAssembly`] store
//! that enforces id uniqueness and insertion order. The store is mutated
//! only by direct operator actions; the analysis machinery reads an
//! immutable snapshot of it at submission time.

mod errors;
mod prospect;
mod startup_info;
mod store;

pub use errors::TeamError;
pub use prospect::{Prospect, TOP_UNIVERSITIES};
pub use startup_info::{PitchDeck, StartupInfo};
pub use store::TeamAssembly;
