//! HTTP API for the bookmark resource.
//!
//! Handlers are thin async functions over the validator, sanitizer and
//! store; the router wires them to paths and middleware layers.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;

pub use router::create_router;
