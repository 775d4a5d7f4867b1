use std::collections::HashMap;
use std::env;
use std::net::IpAddr;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Allows every origin
pub const ANY_ORIGIN: &str = "*";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: PathBuf,
    pub cors_origin: String,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let vars: HashMap<String, String> = env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Read configuration from an explicit variable map
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let host_str = vars
            .get("TRIVIA_HOST")
            .map(String::as_str)
            .unwrap_or(DEFAULT_HOST);
        let host = host_str
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_str.to_string()))?;

        let port = match vars.get("PORT") {
            Some(port_str) => port_str.trim().parse::<u16>()?,
            None => DEFAULT_PORT,
        };

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let database_path = vars
            .get("TRIVIA_DATABASE_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(trivia_core::database_file);

        let cors_origin = vars
            .get("CORS_ORIGIN")
            .cloned()
            .unwrap_or_else(|| ANY_ORIGIN.to_string());
        validate_cors_origin(&cors_origin)?;

        Ok(Config {
            host,
            port,
            database_path,
            cors_origin,
        })
    }
}

fn validate_cors_origin(origin: &str) -> Result<(), ConfigError> {
    if origin == ANY_ORIGIN {
        return Ok(());
    }

    axum::http::HeaderValue::from_str(origin)
        .map(|_| ())
        .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))
}
