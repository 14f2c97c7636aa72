use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

use crate::options::CorsOptions;
use crate::origin::{AllowedOrigins, LOOPBACK_DEV_ORIGIN};
use crate::util::split_comma_list;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_VERSION: &str = "0.1.0";
/// The service only ever listens on loopback.
pub const BIND_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

pub const PORT_VAR: &str = "PORT";
pub const VERSION_VAR: &str = "APP_VERSION";
pub const ALLOWED_ORIGINS_VAR: &str = "CORS_ALLOWED_ORIGINS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub version: String,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be an integer between 0 and 65535, got `{value}`")]
    InvalidPort { value: String },
    #[error("CORS_ALLOWED_ORIGINS is set but lists no origins")]
    EmptyOriginList,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup` instead of the process
    /// environment. Unset variables fall back to their defaults; a blank
    /// `PORT` counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            _ => DEFAULT_PORT,
        };

        let version = lookup(VERSION_VAR).unwrap_or_else(|| DEFAULT_VERSION.to_string());

        let allowed_origins = match lookup(ALLOWED_ORIGINS_VAR) {
            Some(raw) => {
                let origins: Vec<String> = split_comma_list(&raw).map(str::to_string).collect();
                if origins.is_empty() {
                    return Err(ConfigError::EmptyOriginList);
                }
                origins
            }
            None => vec![LOOPBACK_DEV_ORIGIN.to_string()],
        };

        Ok(Self {
            port,
            version,
            allowed_origins,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(BIND_ADDRESS, self.port)
    }

    pub fn cors_options(&self) -> CorsOptions {
        CorsOptions {
            origins: AllowedOrigins::list(self.allowed_origins.iter().cloned()),
            ..CorsOptions::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            version: DEFAULT_VERSION.to_string(),
            allowed_origins: vec![LOOPBACK_DEV_ORIGIN.to_string()],
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
