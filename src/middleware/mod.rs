//! Middleware components for HTTP request processing.
//!
//! Cross-cutting concerns layered onto the router: security headers on every
//! response, early request validation, and the typed form and path-id
//! extractors used by the handlers.

pub mod security_headers;
pub mod validation;

pub use validation::{EntityId, ValidatedForm};
