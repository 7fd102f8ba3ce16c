//! Runtime configuration from environment variables (`.env` is loaded by the binary).

use crate::error::ConfigError;
use crate::service::ListPolicy;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "./db/main.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// SQLite file; parent directories are created on startup.
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
    pub list_policy: ListPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            list_policy: ListPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(v) => v.parse::<u16>().map_err(|_| ConfigError::Invalid { key: "PORT", value: v })?,
            None => defaults.port,
        };
        let body_limit_bytes = match get("BODY_LIMIT_BYTES") {
            Some(v) => v
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid { key: "BODY_LIMIT_BYTES", value: v })?,
            None => defaults.body_limit_bytes,
        };
        let list_policy = match get("OPENINGS_EMPTY_LIST_NOT_FOUND") {
            Some(v) => {
                if parse_bool("OPENINGS_EMPTY_LIST_NOT_FOUND", v)? {
                    ListPolicy::EmptyIsNotFound
                } else {
                    ListPolicy::EmptyOk
                }
            }
            None => defaults.list_policy,
        };

        Ok(Self {
            database_path: get("DATABASE_PATH").map(PathBuf::from).unwrap_or(defaults.database_path),
            host: get("HOST").unwrap_or(defaults.host),
            port,
            body_limit_bytes,
            list_policy,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value }),
    }
}
