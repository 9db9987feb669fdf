//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routing)
//!     → request.rs (stamp x-request-id)
//!     → health.rs   for "/" and "/health" (answered locally)
//!     → forward::*  for everything else
//!     → Send to client
//! ```

pub mod health;
pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
