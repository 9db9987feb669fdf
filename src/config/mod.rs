//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (PORT)
//!     → ProxyConfig (immutable)
//!     → shared via Arc to the server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults so the process runs with no config file at all
//! - The backend address is a config field whose default (127.0.0.1:7575)
//!   is the deployment contract

pub mod loader;
pub mod schema;

pub use schema::ProxyConfig;
pub use schema::{BackendConfig, ListenerConfig};
