//! Configuration types and loading
//!
//! Values come from the process environment; a `.env` file is honoured by the
//! server binary before `AppConfig::from_env` runs.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::pagination::{QueryLimits, DEFAULT_LIMIT, MAX_LIMIT};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Campaign dataset configuration
    pub catalog: CatalogConfig,

    /// Page size bounds for the campaign listing
    pub limits: QueryLimits,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// JSON file holding the campaign array; the embedded dataset is used when unset
    pub data_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
            },
            catalog: CatalogConfig::default(),
            limits: QueryLimits::default(),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    fn invalid(key: &str, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // Server
        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("PORT", format!("not a port number: {:?}", port)))?;
        }

        // Catalog
        if let Some(path) = lookup("CAMPAIGNS_DATA_PATH").filter(|p| !p.trim().is_empty()) {
            config.catalog.data_path = Some(PathBuf::from(path));
        }

        // Limits
        let default_limit = parse_limit(&lookup, "CAMPAIGNS_DEFAULT_LIMIT", DEFAULT_LIMIT)?;
        let max_limit = parse_limit(&lookup, "CAMPAIGNS_MAX_LIMIT", MAX_LIMIT)?;
        if default_limit > max_limit {
            return Err(ConfigError::invalid(
                "CAMPAIGNS_DEFAULT_LIMIT",
                format!("{} exceeds CAMPAIGNS_MAX_LIMIT ({})", default_limit, max_limit),
            ));
        }
        config.limits = QueryLimits::new(default_limit, max_limit);

        Ok(config)
    }

    /// Get the server address
    pub fn server_addr(&self) -> SocketAddr {
        let ip: IpAddr = self.server.host.parse().unwrap_or([0, 0, 0, 0].into());
        SocketAddr::new(ip, self.server.port)
    }
}

fn parse_limit<F>(lookup: &F, key: &str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<usize>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ConfigError::invalid(
            key,
            format!("must be a positive integer, got {:?}", raw),
        )),
    }
}
