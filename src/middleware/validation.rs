use std::sync::Arc;

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request, State},
    http::{request::Parts, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::AppConfig;
use crate::error::{validation::Validate, AppError};

/// An Axum middleware that validates incoming requests before they reach a handler.
///
/// This middleware checks for:
/// - Path traversal attempts in the request URI.
/// - A declared `Content-Length` above `server.max_body_bytes` on POST requests.
///
/// `DefaultBodyLimit` enforces the same limit for bodies without a length header.
pub async fn validate_request_middleware(State(cfg): State<Arc<AppConfig>>, req: Request, next: Next) -> Response {
    let uri_path = req.uri().path();
    if contains_path_traversal(uri_path) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": {
                    "code": "INVALID_PATH",
                    "message": "Path traversal detected in request",
                },
                "status": 400,
            })),
        )
            .into_response();
    }

    if *req.method() == Method::POST {
        let declared = req
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<usize>().ok());
        let max_body_size = cfg.server.max_body_bytes;
        if let Some(length) = declared {
            if length > max_body_size {
                return (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    Json(json!({
                        "error": {
                            "code": "PAYLOAD_TOO_LARGE",
                            "message": format!("Request body exceeds maximum size of {} bytes", max_body_size),
                        },
                        "status": 413,
                    })),
                )
                    .into_response();
            }
        }
    }

    next.run(req).await
}

/// Check if a path contains traversal sequences, plain or URL-encoded
fn contains_path_traversal(path: &str) -> bool {
    let lower = path.to_lowercase();

    if path.contains("/..") || path.contains("\\..") || path.starts_with("..") {
        return true;
    }
    if path.contains("/./") || path.contains("\\.\\") {
        return true;
    }

    let encoded_patterns = ["%2e%2e", "%252e%252e", "%2e/", "/%2e", "%2f%2e", "%5c%2e", "%00"];
    if encoded_patterns.iter().any(|p| lower.contains(p)) {
        return true;
    }

    path.contains('\0')
}

/// Form extractor that runs the form's presence checks.
///
/// Missing fields, non-numeric ids and unparsable dates are turned into
/// `AppError::BadRequest`; blank text fields into `AppError::ValidationError`.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// Numeric `{id}` path segment.
///
/// A segment that is not an integer matches no record, so it is answered with
/// `AppError::NotFound` and the usual JSON error body.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i64);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::NotFound(format!("No record for this id: {}", rejection.body_text())))?;
        Ok(Self(id))
    }
}

/// Sanitizes user input for logging purposes.
///
/// Removes control characters, limits the length and escapes quotes.
pub fn sanitize_for_logging(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || c.is_whitespace())
        .take(200)
        .collect::<String>()
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\'', "\\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_traversal_detection() {
        assert!(contains_path_traversal("../etc/passwd"));
        assert!(contains_path_traversal("/books/../etc"));
        assert!(contains_path_traversal("/books/%2e%2e/etc"));
        assert!(contains_path_traversal("/books\0"));

        assert!(!contains_path_traversal("/books"));
        assert!(!contains_path_traversal("/books/update/12"));
        assert!(!contains_path_traversal("/transactions/delete/3"));
    }

    #[test]
    fn test_sanitize_for_logging() {
        assert_eq!(sanitize_for_logging("Dune"), "Dune");
        assert_eq!(sanitize_for_logging("O'Brien"), "O\\'Brien");

        let sanitized = sanitize_for_logging("isbn\x00with\x01control");
        assert!(!sanitized.contains('\x00'));
        assert!(!sanitized.contains('\x01'));

        let long_text = "a".repeat(300);
        assert_eq!(sanitize_for_logging(&long_text).len(), 200);
    }
}
