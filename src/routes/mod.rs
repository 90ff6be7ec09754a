//! HTTP route handlers for the Bibliothek API.
//!
//! - `books`, `members`: collection list/create, edit view, update, delete
//! - `transactions`: issue and return of books plus the same CRUD shape
//! - `health`: landing page, health/readiness probes, metrics, version
//!
//! Successful writes answer with `303 See Other` pointing at the collection.

pub mod books;
pub mod health;
pub mod members;
pub mod transactions;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::middleware::{security_headers::security_headers_middleware, validation::validate_request_middleware};
use crate::state::AppState;

/// Builds the application router with all library routes and the request
/// middleware stack.
pub fn router(state: AppState) -> Router {
    let cfg = state.config.clone();
    let body_limit = cfg.server.max_body_bytes;

    Router::new()
        .route("/", get(health::index))
        .route("/healthz", get(health::healthz))
        .route("/readyz", get(health::readyz))
        .route("/metrics", get(health::metrics))
        .route("/metrics/prometheus", get(health::metrics_prometheus))
        .route("/version", get(health::version))
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/update/{id}", get(books::edit_book).post(books::update_book))
        .route("/books/delete/{id}", post(books::delete_book))
        .route("/members", get(members::list_members).post(members::create_member))
        .route("/members/update/{id}", get(members::edit_member).post(members::update_member))
        .route("/members/delete/{id}", post(members::delete_member))
        .route("/transactions", get(transactions::list_transactions).post(transactions::issue_book))
        .route(
            "/transactions/update/{id}",
            get(transactions::edit_transaction).post(transactions::return_book),
        )
        .route("/transactions/delete/{id}", post(transactions::delete_transaction))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(from_fn_with_state(cfg.clone(), validate_request_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn_with_state(cfg, security_headers_middleware))
}
