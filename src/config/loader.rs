//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ProxyConfig;

/// Name of the environment variable overriding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { var: &'static str, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { var, reason } => write!(f, "Invalid {}: {}", var, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ProxyConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;
    Ok(config)
}

/// Apply environment overrides to a loaded configuration.
///
/// `PORT` rewrites the listener port; an unparseable value is a startup
/// error, same as a bind failure.
pub fn apply_env_overrides(config: &mut ProxyConfig) -> Result<(), ConfigError> {
    if let Ok(value) = std::env::var(PORT_VAR) {
        let port: u16 = value.parse().map_err(|e| ConfigError::Env {
            var: PORT_VAR,
            reason: format!("{} ({:?})", e, value),
        })?;
        config.listener.set_port(port);
    }
    Ok(())
}

/// Build the effective configuration: optional TOML file, then environment.
pub fn from_sources(path: Option<&Path>) -> Result<ProxyConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };
    apply_env_overrides(&mut config)?;
    Ok(config)
}
