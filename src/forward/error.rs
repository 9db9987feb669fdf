//! Typed errors for the forwarding protocol.

use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

/// Outcome of a failed (or backend-failed) forward attempt.
///
/// `Application` is not a proxy failure: the backend produced a well-formed
/// HTTP error response and the caller must relay it verbatim. The other
/// variants mean the backend could not be reached and map to 503. Keeping
/// the variants distinct makes the relay-vs-translate decision an
/// exhaustive `match` rather than a catch-ordering accident.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// Well-formed HTTP error response (4xx/5xx) from the backend.
    #[error("backend answered {status}")]
    Application {
        status: StatusCode,
        response: Response<Body>,
    },

    /// Connection refused, resolution failure, malformed response.
    #[error("backend unreachable: {reason}")]
    Unavailable { reason: String },

    /// The bounded upstream deadline expired.
    #[error("backend did not answer within {limit:?}")]
    Timeout { limit: Duration },
}

/// Render the explicit "backend not reachable" answer.
pub fn service_unavailable(details: &str) -> Response<Body> {
    let body = json!({
        "error": "Service unavailable",
        "details": details,
    });
    Response::builder()
        .status(StatusCode::SERVICE_UNAVAILABLE)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
