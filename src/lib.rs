//! Reverse proxy for a ledger JSON-over-HTTP API.
//!
//! The process answers liveness probes (`/`, `/health`) locally and relays
//! every other request to a single fixed backend:
//!
//! ```text
//! client ──▶ http::server (router)
//!              ├─ "/" | "/health" ──▶ 200 OK        (never touches backend)
//!              └─ anything else ────▶ forward ──▶ backend (localhost:7575)
//!                                      │
//!                                      ├─ reply (any status) ─▶ relayed verbatim
//!                                      └─ unreachable/timeout ─▶ 503 JSON
//! ```

pub mod config;
pub mod forward;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
