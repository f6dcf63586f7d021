// src/config.rs
use std::{env, net::SocketAddr, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    gemini_api_key: String,
    gemini_model: String,
    gemini_api_base: String,
    redis_url: Option<String>,
    storage_namespace: String,
    public_site_url: String,
    allowed_origins: Vec<String>,
    rate_limit_enabled: bool,
    max_viewers: usize,
    viewer_idle_ttl: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_STORAGE_NAMESPACE: &str = "logiinsight";
const DEFAULT_PUBLIC_SITE_URL: &str = "http://localhost:3000";
const DEFAULT_MAX_VIEWERS: usize = 10_000;
const DEFAULT_VIEWER_IDLE_TTL_SECS: u64 = 30 * 60;

fn default_allowed_origins() -> Vec<String> {
    vec![DEFAULT_PUBLIC_SITE_URL.into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values; an absent provider key is allowed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let raw_addr = non_empty("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into());
        let listen_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::Invalid(format!("LISTEN_ADDR `{raw_addr}`: {err}")))?;

        let gemini_api_key = non_empty("GEMINI_API_KEY")
            .or_else(|| non_empty("API_KEY"))
            .unwrap_or_default();

        let rate_limit_enabled = match non_empty("RATE_LIMIT_ENABLED") {
            None => true,
            Some(value) => parse_flag(&value).ok_or_else(|| {
                ConfigError::Invalid(format!("RATE_LIMIT_ENABLED `{value}` is not a boolean"))
            })?,
        };

        let max_viewers = match non_empty("MAX_VIEWERS") {
            None => DEFAULT_MAX_VIEWERS,
            Some(value) => value
                .parse::<usize>()
                .ok()
                .filter(|max| *max > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!("MAX_VIEWERS `{value}` is not a positive integer"))
                })?,
        };

        let idle_secs = match non_empty("VIEWER_IDLE_TTL_SECS") {
            None => DEFAULT_VIEWER_IDLE_TTL_SECS,
            Some(value) => value.parse::<u64>().map_err(|err| {
                ConfigError::Invalid(format!("VIEWER_IDLE_TTL_SECS `{value}`: {err}"))
            })?,
        };

        let allowed_origins = non_empty("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            gemini_api_key,
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into()),
            gemini_api_base: non_empty("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.into()),
            redis_url: non_empty("REDIS_URL"),
            storage_namespace: non_empty("STORAGE_NAMESPACE")
                .unwrap_or_else(|| DEFAULT_STORAGE_NAMESPACE.into()),
            public_site_url: non_empty("PUBLIC_SITE_URL")
                .unwrap_or_else(|| DEFAULT_PUBLIC_SITE_URL.into()),
            allowed_origins,
            rate_limit_enabled,
            max_viewers,
            viewer_idle_ttl: Duration::from_secs(idle_secs),
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Empty when neither `GEMINI_API_KEY` nor `API_KEY` is set.
    pub fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }

    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }

    pub fn gemini_api_base(&self) -> &str {
        &self.gemini_api_base
    }

    /// Comments are kept in memory when unset.
    pub fn redis_url(&self) -> Option<&str> {
        self.redis_url.as_deref()
    }

    pub fn storage_namespace(&self) -> &str {
        &self.storage_namespace
    }

    pub fn public_site_url(&self) -> &str {
        &self.public_site_url
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }

    pub fn max_viewers(&self) -> usize {
        self.max_viewers
    }

    /// How long an unused viewer id stays valid.
    pub fn viewer_idle_ttl(&self) -> Duration {
        self.viewer_idle_ttl
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
