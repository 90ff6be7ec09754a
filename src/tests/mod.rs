//! Unit and router tests for the Bibliothek service.
//!
//! ## Test Modules
//!
//! - **db_tests**: Schema initialization
//! - **repository_tests**: Repository operations and the loan lifecycle
//! - **api_tests**: HTTP surface of books, members and transactions
//! - **health_api_tests**: Landing page, probes, metrics and version
//! - **error_tests**: Error mapping and responses
//! - **config_tests**: Configuration loading and validation
//!
//! All database tests run against a private in-memory SQLite database.

pub mod config_tests;
pub mod health_api_tests;

use crate::config::{AppConfig, ReferencePolicy};
use crate::state::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// One long-lived connection so the in-memory database survives between queries.
pub(crate) async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

pub(crate) async fn setup_test_db() -> SqlitePool {
    let pool = memory_pool().await;
    crate::db::init_db(&pool).await.unwrap();
    pool
}

pub(crate) async fn setup_test_state(policy: ReferencePolicy) -> AppState {
    let pool = setup_test_db().await;
    let mut config = AppConfig::default();
    config.library.reference_policy = policy;
    AppState::new(pool, config)
}
