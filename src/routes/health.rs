use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

// Landing page: the three collections
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "collections": {
            "books": "/books",
            "members": "/members",
            "transactions": "/transactions",
        }
    }))
}

// Health check endpoint - lightweight, no DB access
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

// Readiness probe: checks DB connectivity with timeout protection
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let query = sqlx::query("SELECT 1").fetch_one(&state.db);
    match tokio::time::timeout(std::time::Duration::from_secs(5), query).await {
        Ok(Ok(_)) => (StatusCode::OK, "ready").into_response(),
        Ok(Err(e)) => (StatusCode::SERVICE_UNAVAILABLE, format!("not ready: {}", e)).into_response(),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "not ready: timeout").into_response(),
    }
}

// Metrics endpoint: returns JSON snapshot
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.metrics.get_snapshot();
    Json(snapshot)
}

// Prometheus-compatible text exposition format
pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    let m = state.metrics.get_snapshot();
    let body = format!(
        "# HELP bibliothek_books_created Total books created\n# TYPE bibliothek_books_created counter\nbibliothek_books_created {}\n\
# HELP bibliothek_members_created Total members created\n# TYPE bibliothek_members_created counter\nbibliothek_members_created {}\n\
# HELP bibliothek_loans_issued Total loans issued\n# TYPE bibliothek_loans_issued counter\nbibliothek_loans_issued {}\n\
# HELP bibliothek_loans_returned Total loans returned\n# TYPE bibliothek_loans_returned counter\nbibliothek_loans_returned {}\n\
# HELP bibliothek_records_deleted Rows deleted via the API\n# TYPE bibliothek_records_deleted counter\nbibliothek_records_deleted {}\n\
# HELP bibliothek_uptime_seconds Uptime seconds\n# TYPE bibliothek_uptime_seconds gauge\nbibliothek_uptime_seconds {}\n",
        m.books_created,
        m.members_created,
        m.loans_issued,
        m.loans_returned,
        m.records_deleted,
        m.uptime_seconds,
    );
    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}

// Version/Build info endpoint (JSON)
pub async fn version() -> impl IntoResponse {
    let body = serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "package": {
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "authors": env!("CARGO_PKG_AUTHORS"),
            "license": env!("CARGO_PKG_LICENSE"),
        },
        "build": {
            "profile": if cfg!(debug_assertions) { "debug" } else { "release" },
            "os": std::env::consts::OS,
            "arch": std::env::consts::ARCH,
        }
    });
    (StatusCode::OK, Json(body))
}
