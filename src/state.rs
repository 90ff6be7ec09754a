use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::repository::Repository;

/// The shared application state.
///
/// Cloned into every handler by Axum. Holds no mutable data besides the atomic
/// counters in [`Metrics`]; all library data lives in the store.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    ///
    /// Used directly only by the readiness probe; entity access goes through `repo`.
    pub db: sqlx::SqlitePool,
    /// Per-table repositories sharing the pool.
    pub repo: Repository,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// The application metrics.
    pub metrics: Metrics,
}

impl AppState {
    /// Creates a new `AppState`.
    ///
    /// The repositories take the reference policy from `config.library`.
    pub fn new(db: sqlx::SqlitePool, config: AppConfig) -> Self {
        let repo = Repository::new(db.clone(), config.library.reference_policy);
        Self { db, repo, config: Arc::new(config), metrics: Metrics::new() }
    }
}
