//! Request forwarding to the backend.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → buffer body (bounded; payloads are small JSON)
//!     → rewrite URI against the backend origin
//!     → filter request headers (Host, Connection)
//!     → bounded upstream call
//!     → buffer backend body, filter response headers
//!     → Ok(response)                        2xx/3xx
//!     → Err(Application { response, .. })   4xx/5xx, relayed verbatim
//!     → Err(Unavailable | Timeout)          mapped to 503 by the caller
//! ```
//!
//! # Design Decisions
//! - Bodies are relayed as the exact received bytes, never re-serialized
//! - The upstream deadline is the only timeout in the system
//! - The client is shared across handlers; it is safe for concurrent use

use std::str::FromStr;
use std::time::Duration;

use axum::body::Body;
use axum::http::uri::{Authority, PathAndQuery, Scheme};
use axum::http::{Request, Response, Uri};
use hyper::body::Incoming;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;

use crate::config::{BackendConfig, ProxyConfig};

pub mod error;
pub mod headers;

pub use error::{service_unavailable, ForwardError};

/// Upstream HTTP client shared by all handlers.
pub type UpstreamClient = Client<HttpConnector, Body>;

/// Build the shared upstream client.
pub fn upstream_client() -> UpstreamClient {
    Client::builder(TokioExecutor::new()).build(HttpConnector::new())
}

/// Relay one request to the backend.
///
/// Any well-formed backend reply is surfaced to the caller: 2xx/3xx as
/// `Ok`, 4xx/5xx as `ForwardError::Application` carrying the full
/// response. Only transport-level failures become `Unavailable`/`Timeout`.
pub async fn forward(
    client: &UpstreamClient,
    config: &ProxyConfig,
    request: Request<Body>,
) -> Result<Response<Body>, ForwardError> {
    let (parts, body) = request.into_parts();

    // Bodies are small JSON payloads; buffer rather than stream.
    let body_bytes = axum::body::to_bytes(body, config.limits.max_body_size)
        .await
        .map_err(|e| ForwardError::Unavailable {
            reason: format!("failed to read request body: {e}"),
        })?;

    let uri = rewrite_uri(parts.uri, &config.backend)?;
    let mut forwarded = Request::builder()
        .method(parts.method)
        .uri(uri)
        .body(Body::from(body_bytes))
        .map_err(|e| ForwardError::Unavailable {
            reason: format!("failed to build forwarded request: {e}"),
        })?;
    *forwarded.headers_mut() = headers::filter_request_headers(&parts.headers);

    let limit = Duration::from_secs(config.timeouts.upstream_secs);
    let response = tokio::time::timeout(limit, roundtrip(client, forwarded))
        .await
        .map_err(|_| ForwardError::Timeout { limit })??;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(ForwardError::Application { status, response });
    }
    Ok(response)
}

/// Send the forwarded request and buffer the reply.
async fn roundtrip(
    client: &UpstreamClient,
    request: Request<Body>,
) -> Result<Response<Body>, ForwardError> {
    let response: Response<Incoming> =
        client
            .request(request)
            .await
            .map_err(|e| ForwardError::Unavailable {
                reason: e.to_string(),
            })?;

    let (mut parts, body) = response.into_parts();
    parts.headers = headers::filter_response_headers(&parts.headers);

    // Read to completion so the outbound transport recomputes framing and
    // the relayed body stays byte-for-byte identical.
    let bytes = axum::body::to_bytes(Body::new(body), usize::MAX)
        .await
        .map_err(|e| ForwardError::Unavailable {
            reason: format!("failed to read backend response: {e}"),
        })?;

    Ok(Response::from_parts(parts, Body::from(bytes)))
}

/// Point the request URI at the backend, keeping path and query intact.
fn rewrite_uri(uri: Uri, backend: &BackendConfig) -> Result<Uri, ForwardError> {
    let mut parts = uri.into_parts();
    parts.scheme = Some(Scheme::HTTP);
    parts.authority = Some(Authority::from_str(&backend.authority()).map_err(|e| {
        ForwardError::Unavailable {
            reason: format!("invalid backend address: {e}"),
        }
    })?);
    if parts.path_and_query.is_none() {
        parts.path_and_query = Some(PathAndQuery::from_static("/"));
    }
    Uri::from_parts(parts).map_err(|e| ForwardError::Unavailable {
        reason: format!("invalid forwarded uri: {e}"),
    })
}
