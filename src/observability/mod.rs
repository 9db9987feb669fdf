//! Observability subsystem.
//!
//! Structured logging only: the proxy's operational surface is its log
//! stream. Request IDs from `http::request` flow through every line.

pub mod logging;
