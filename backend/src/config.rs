//! Host configuration read from the environment.
//!
//! | variable                    | default     |
//! |-----------------------------|-------------|
//! | `UNIVERSITIES_HOST`         | `127.0.0.1` |
//! | `UNIVERSITIES_PORT`         | `8080`      |
//! | `UNIVERSITIES_API_BASE`     | empty       |
//! | `UNIVERSITIES_OPEN_BROWSER` | `true`      |
//!
//! `UNIVERSITIES_API_BASE` is forwarded to the frontend through
//! `/config.json`; an empty value makes it call the API on its own origin.

use common::model::config::ClientConfig;

const HOST_VAR: &str = "UNIVERSITIES_HOST";
const PORT_VAR: &str = "UNIVERSITIES_PORT";
const API_BASE_VAR: &str = "UNIVERSITIES_API_BASE";
const OPEN_BROWSER_VAR: &str = "UNIVERSITIES_OPEN_BROWSER";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be one of 1/0/true/false/yes/no, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    pub api_base: String,
    pub open_browser: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            api_base: String::new(),
            open_browser: true,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let port = match get(PORT_VAR) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value,
            })?,
            None => defaults.port,
        };
        let open_browser = match get(OPEN_BROWSER_VAR) {
            Some(value) => parse_flag(OPEN_BROWSER_VAR, value)?,
            None => defaults.open_browser,
        };

        Ok(Self {
            host: get(HOST_VAR).unwrap_or(defaults.host),
            port,
            api_base: get(API_BASE_VAR).unwrap_or(defaults.api_base),
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// The part of the configuration the frontend is allowed to see.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base: self.api_base.clone(),
        }
    }
}

fn parse_flag(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value }),
    }
}
