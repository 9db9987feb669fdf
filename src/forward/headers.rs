//! Hop-by-hop header filtering.
//!
//! # Responsibilities
//! - Strip connection-establishment headers before re-sending a request
//! - Strip connection/framing headers before replying to the client
//! - Preserve order and multiplicity of every surviving header
//!
//! # Design Decisions
//! - The proxy terminates one HTTP connection and originates another, so
//!   hop-by-hop semantics must not leak across that boundary
//! - `HeaderName` comparison is case-insensitive by construction; no
//!   manual lowercasing needed

use axum::http::{header, HeaderMap, HeaderName};

/// Headers never copied from the inbound request to the forwarded one.
const REQUEST_EXCLUDED: [HeaderName; 2] = [header::HOST, header::CONNECTION];

/// Headers never copied from the backend response to the outbound one.
/// Framing is recomputed by the outbound transport.
const RESPONSE_EXCLUDED: [HeaderName; 2] = [header::CONNECTION, header::TRANSFER_ENCODING];

/// Copy inbound request headers, dropping `Host` and `Connection`.
pub fn filter_request_headers(src: &HeaderMap) -> HeaderMap {
    filter(src, &REQUEST_EXCLUDED)
}

/// Copy backend response headers, dropping `Connection` and `Transfer-Encoding`.
pub fn filter_response_headers(src: &HeaderMap) -> HeaderMap {
    filter(src, &RESPONSE_EXCLUDED)
}

fn filter(src: &HeaderMap, excluded: &[HeaderName]) -> HeaderMap {
    let mut filtered = HeaderMap::with_capacity(src.len());
    for (name, value) in src {
        if excluded.contains(name) {
            continue;
        }
        filtered.append(name.clone(), value.clone());
    }
    filtered
}
