//! # Bibliothek Backend Library
//!
//! Library management service: books, members and the loan transactions that
//! link them, stored in a single SQLite file and served over HTTP.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **SQLx**: Asynchronous database operations with SQLite
//! - **Tokio**: Async runtime
//! - **Serde**: Form decoding and JSON views
//!
//! ## Core Components
//!
//! - [`config`]: Layered application configuration
//! - [`db`]: Schema initialization
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`metrics`]: Request counters
//! - [`middleware`]: Security headers, request validation, typed forms
//! - [`repository`]: Per-table database operations and the loan lifecycle
//! - [`routes`]: HTTP endpoint handlers and the router
//! - [`state`]: Shared application state
//! - [`types`]: Records and request forms
//!
//! ## Loan lifecycle
//!
//! A transaction is *open* while its return date is absent and *closed* once
//! it is set. Issuing never checks or changes a book's availability flag, and
//! by default neither issuing nor deleting checks that referenced rows exist;
//! see [`config::ReferencePolicy`].

pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod repository;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
