//! Profile registry adapters.
//!
//! Implementations of the ProfileRegistry port:
//!
//! - `HttpProfileRegistry` - the real registry service over HTTP
//! - `InMemoryProfileRegistry` - in-memory implementation for testing

mod http;
mod in_memory;

pub use http::HttpProfileRegistry;
pub use in_memory::InMemoryProfileRegistry;
