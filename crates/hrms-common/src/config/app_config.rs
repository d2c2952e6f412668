//! Application configuration structs
//!
//! Built once at startup from environment variables (and an optional `.env` file),
//! then handed to each component by reference.

use hrms_core::SessionIdentity;
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub upstream: UpstreamConfig,
    pub pairing: PairingConfig,
    pub session: SessionConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Credential store configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `postgres://…` or `memory://`
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Upstream HR backend configuration
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    pub login_path: String,
    pub refresh_path: String,
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        self.url(&self.login_path)
    }

    #[must_use]
    pub fn refresh_url(&self) -> String {
        self.url(&self.refresh_path)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Pairing flow configuration
#[derive(Debug, Clone)]
pub struct PairingConfig {
    /// Externally reachable base URL of the pairing page
    pub public_base_url: String,
    /// Code lifetime in seconds, `0` disables expiry
    pub code_ttl_secs: u64,
    /// Draws attempted before giving up on a free code
    pub max_mint_attempts: u32,
}

impl PairingConfig {
    #[must_use]
    pub fn connect_url(&self) -> String {
        format!("{}/connect", self.public_base_url)
    }

    #[must_use]
    pub fn code_ttl(&self) -> Option<chrono::Duration> {
        if self.code_ttl_secs == 0 {
            None
        } else {
            i64::try_from(self.code_ttl_secs)
                .ok()
                .and_then(chrono::Duration::try_seconds)
        }
    }
}

/// Session addressing configuration
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub identity: SessionIdentity,
}

// Default value functions
fn default_app_name() -> String {
    "hrms-connector".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_login_path() -> String {
    "/api/auth/login/".to_string()
}

fn default_refresh_path() -> String {
    "/api/auth/token/refresh/".to_string()
}

fn default_upstream_timeout() -> u64 {
    20
}

/// Longest accepted pairing code lifetime (one year)
pub const MAX_CODE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Longest accepted per-call upstream timeout (one hour)
pub const MAX_UPSTREAM_TIMEOUT_SECS: u64 = 60 * 60;

fn default_code_ttl() -> u64 {
    600 // 10 minutes
}

fn default_max_mint_attempts() -> u32 {
    5
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match lookup("APP_ENV") {
            Some(s) => Environment::parse(&s).ok_or(ConfigError::InvalidValue("APP_ENV", s))?,
            None => Environment::default(),
        };

        let port = parse_or(&lookup, "PORT", default_port)?;

        let base_url = lookup("HRMS_API_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::MissingVar("HRMS_API_BASE_URL"))?;

        let public_base_url = lookup("SERVER_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| format!("http://localhost:{port}"));

        let identity = {
            let mode = lookup("SESSION_MODE").unwrap_or_else(|| "fixed".to_string());
            SessionIdentity::from_mode(&mode, lookup("SESSION_ID"))
                .ok_or(ConfigError::InvalidValue("SESSION_MODE", mode))?
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(default_host),
                port,
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", default_min_connections)?,
            },
            upstream: UpstreamConfig {
                base_url: base_url.trim().trim_end_matches('/').to_string(),
                login_path: normalize_path(lookup("HRMS_LOGIN_PATH").unwrap_or_else(default_login_path)),
                refresh_path: normalize_path(
                    lookup("HRMS_REFRESH_PATH").unwrap_or_else(default_refresh_path),
                ),
                timeout_secs: parse_bounded(
                    &lookup,
                    "UPSTREAM_TIMEOUT_SECONDS",
                    default_upstream_timeout,
                    MAX_UPSTREAM_TIMEOUT_SECS,
                )?,
            },
            pairing: PairingConfig {
                public_base_url: public_base_url.trim().trim_end_matches('/').to_string(),
                code_ttl_secs: parse_bounded(
                    &lookup,
                    "PAIRING_CODE_TTL_SECONDS",
                    default_code_ttl,
                    MAX_CODE_TTL_SECS,
                )?,
                max_mint_attempts: parse_or(&lookup, "PAIRING_MAX_ATTEMPTS", default_max_mint_attempts)?
                    .max(1),
            },
            session: SessionConfig { identity },
        })
    }
}

/// Parse an optional variable, falling back to a default when unset
fn parse_or<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

/// Like `parse_or`, but values above `max` are rejected
fn parse_bounded<F>(
    lookup: &F,
    key: &'static str,
    default: fn() -> u64,
    max: u64,
) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, key, default)?;
    if value > max {
        return Err(ConfigError::InvalidValue(
            key,
            format!("{value} (maximum is {max})"),
        ));
    }
    Ok(value)
}

fn normalize_path(path: String) -> String {
    if path.starts_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
