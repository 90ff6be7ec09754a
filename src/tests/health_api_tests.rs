#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::ReferencePolicy;
    use crate::routes;
    use crate::tests::setup_test_state;

    async fn setup_test_app() -> Router {
        routes::router(setup_test_state(ReferencePolicy::Ignore).await)
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        response.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    #[tokio::test]
    async fn test_index_lists_collections() {
        let app = setup_test_app().await;

        let response = app.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let v: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(v["collections"]["books"], "/books");
        assert_eq!(v["collections"]["members"], "/members");
        assert_eq!(v["collections"]["transactions"], "/transactions");
    }

    #[tokio::test]
    async fn test_healthz_endpoint() {
        let app = setup_test_app().await;

        let response = app.oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(&body_bytes(response).await[..], b"ok");
    }

    #[tokio::test]
    async fn test_version_endpoint() {
        let app = setup_test_app().await;

        let response = app.oneshot(Request::builder().uri("/version").body(Body::empty()).unwrap()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let v: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(v["name"], "bibliothek");
        assert!(!v["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_readyz_endpoint_ok() {
        let app = setup_test_app().await;

        let response = app.oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(&body_bytes(response).await[..], b"ready");
    }

    #[tokio::test]
    async fn test_readyz_endpoint_db_error() {
        let state = setup_test_state(ReferencePolicy::Ignore).await;
        state.db.close().await;
        let app = routes::router(state);

        let response = app.oneshot(Request::builder().uri("/readyz").body(Body::empty()).unwrap()).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(String::from_utf8_lossy(&body_bytes(response).await).contains("not ready"));
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let app = setup_test_app().await;

        let response = app.oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let v: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(v["books_created"], 0);
        assert_eq!(v["loans_issued"], 0);
    }

    #[tokio::test]
    async fn test_metrics_prometheus_endpoint() {
        let app = setup_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/metrics/prometheus").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body_str = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(body_str.contains("bibliothek_books_created 0"));
        assert!(body_str.contains("bibliothek_loans_returned 0"));
        assert!(body_str.contains("# TYPE bibliothek_uptime_seconds gauge"));
    }
}
