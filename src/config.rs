// src/config.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_STORAGE_DIR: &str = "PPTX";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Settings for the chat-completion API.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub openai: OpenAiConfig,
    pub storage_dir: PathBuf,
    pub bind_addr: String,
    /// Overrides the `Host`-derived prefix of download links. Always ends with `/`.
    pub public_base_url: Option<String>,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any key lookup, so tests don't have to
    /// touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let api_key = get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let timeout_secs = match get("OPENAI_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "OPENAI_TIMEOUT_SECS",
                value: raw,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let public_base_url = get("PUBLIC_BASE_URL").map(|url| {
            if url.ends_with('/') {
                url
            } else {
                format!("{}/", url)
            }
        });

        Ok(Self {
            database_url,
            openai: OpenAiConfig {
                api_key,
                model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                base_url: get("OPENAI_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
            storage_dir: get("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR)),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            public_base_url,
        })
    }
}
