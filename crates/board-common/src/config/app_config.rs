//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub board: BoardConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
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
    /// Parse an `APP_ENV` value; unknown values yield `None`
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }

    /// Read `APP_ENV` from the process environment, after loading `.env`
    ///
    /// Runs before [`AppConfig::from_env`] so that the logging preset sees
    /// the same variables as the rest of the configuration.
    #[must_use]
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve `APP_ENV` through an arbitrary variable lookup
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("APP_ENV")
            .and_then(|s| Self::parse(s.trim()))
            .unwrap_or_default()
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime_secs")]
    pub max_lifetime_secs: u64,
    #[serde(default)]
    pub run_migrations: bool,
}

/// Comment board behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Deadline for the store work of a single request
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Maximum number of comments returned by a thread fetch
    #[serde(default = "default_comment_fetch_limit")]
    pub comment_fetch_limit: i64,
}

impl BoardConfig {
    /// Hard ceiling for `comment_fetch_limit`
    pub const MAX_FETCH_LIMIT: i64 = 100;

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Fetch limit clamped to `1..=MAX_FETCH_LIMIT`
    #[must_use]
    pub fn fetch_limit(&self) -> i64 {
        self.comment_fetch_limit.clamp(1, Self::MAX_FETCH_LIMIT)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            comment_fetch_limit: default_comment_fetch_limit(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "comment-board".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    5
}

fn default_idle_timeout_secs() -> u64 {
    300 // 5 minutes
}

fn default_max_lifetime_secs() -> u64 {
    1800 // 30 minutes
}

fn default_request_timeout_secs() -> u64 {
    5
}

fn default_comment_fetch_limit() -> i64 {
    100
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `DATABASE_URL` is missing or a value cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    /// Returns an error if `DATABASE_URL` is missing or a value cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &'static str| lookup(name).filter(|value| !value.trim().is_empty());

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: Environment::from_lookup(&lookup),
            },
            api: ServerConfig {
                host: var("API_HOST").unwrap_or_else(default_host),
                port: parse_or("API_PORT", var("API_PORT"), default_port)?,
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(
                    "DATABASE_MAX_CONNECTIONS",
                    var("DATABASE_MAX_CONNECTIONS"),
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    "DATABASE_MIN_CONNECTIONS",
                    var("DATABASE_MIN_CONNECTIONS"),
                    default_min_connections,
                )?,
                idle_timeout_secs: parse_or(
                    "DATABASE_IDLE_TIMEOUT_SECS",
                    var("DATABASE_IDLE_TIMEOUT_SECS"),
                    default_idle_timeout_secs,
                )?,
                max_lifetime_secs: parse_or(
                    "DATABASE_MAX_LIFETIME_SECS",
                    var("DATABASE_MAX_LIFETIME_SECS"),
                    default_max_lifetime_secs,
                )?,
                run_migrations: var("DATABASE_RUN_MIGRATIONS")
                    .map(|s| parse_flag("DATABASE_RUN_MIGRATIONS", &s))
                    .transpose()?
                    .unwrap_or(false),
            },
            board: BoardConfig {
                request_timeout_secs: parse_or(
                    "REQUEST_TIMEOUT_SECS",
                    var("REQUEST_TIMEOUT_SECS"),
                    default_request_timeout_secs,
                )?,
                comment_fetch_limit: parse_or(
                    "COMMENT_FETCH_LIMIT",
                    var("COMMENT_FETCH_LIMIT"),
                    default_comment_fetch_limit,
                )?,
            },
        })
    }
}

fn parse_or<T, D>(name: &'static str, value: Option<String>, default: D) -> Result<T, ConfigError>
where
    T: FromStr,
    D: FnOnce() -> T,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        None => Ok(default()),
    }
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue(name, raw.to_string())),
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
