//! Application configuration loaded from the environment.
//!
//! Configuration is read once at process startup, validated, and passed
//! into adapter and service constructors; nothing in the crate reads
//! environment variables after this point.

use std::env;
use std::num::ParseIntError;
use thiserror::Error;

/// Default bind host.
const DEFAULT_HOST: &str = "0.0.0.0";
/// Default HTTP port.
const DEFAULT_PORT: u16 = 5000;
/// Default session token lifetime in seconds.
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;
/// Default Gemini API endpoint.
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// Default Gemini model.
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
/// Default provider request timeout in seconds.
const DEFAULT_GEMINI_TIMEOUT_SECS: u64 = 30;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable has an invalid value.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The environment variable name.
        key: String,
        /// Why the value is invalid.
        message: String,
    },
}

/// Settings for the Gemini suggestion engine adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    /// Provider API key.
    pub api_key: String,
    /// Model name used for `generateContent` calls.
    pub model: String,
    /// API base URL; overridable so tests can target a local stub.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server bind host.
    pub host: String,
    /// HTTP server port.
    pub port: u16,
    /// Secret used to sign session tokens.
    pub jwt_secret: String,
    /// Session token lifetime in seconds.
    pub token_ttl_secs: i64,
    /// Optional `PostgreSQL` connection string; absent selects in-memory
    /// storage.
    pub database_url: Option<String>,
    /// Suggestion engine settings.
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// A `.env` file is loaded first when present.
    ///
    /// # Environment Variables
    ///
    /// - `JWT_SECRET`: session token signing secret (required, non-empty)
    /// - `GEMINI_API_KEY`: suggestion provider key (required)
    /// - `GEMINI_MODEL`, `GEMINI_BASE_URL`, `GEMINI_TIMEOUT_SECS`: provider
    ///   overrides (optional)
    /// - `APP_HOST`, `APP_PORT`: bind address (optional)
    /// - `TOKEN_TTL_SECS`: session lifetime (optional, default 3600)
    /// - `DATABASE_URL`: `PostgreSQL` connection string (optional)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when a required variable is
    /// not set and [`ConfigError::InvalidValue`] when a value fails
    /// validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let jwt_secret = get_required_env("JWT_SECRET")?;
        if jwt_secret.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "JWT_SECRET".to_owned(),
                message: "must not be empty".to_owned(),
            });
        }

        let token_ttl_secs = get_optional_env_parsed("TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        if token_ttl_secs <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_SECS".to_owned(),
                message: "must be positive".to_owned(),
            });
        }

        let gemini = GeminiConfig {
            api_key: get_required_env("GEMINI_API_KEY")?,
            model: get_optional_env("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            base_url: get_optional_env("GEMINI_BASE_URL", DEFAULT_GEMINI_BASE_URL),
            timeout_secs: get_optional_env_parsed("GEMINI_TIMEOUT_SECS", DEFAULT_GEMINI_TIMEOUT_SECS)?,
        };

        Ok(Self {
            host: get_optional_env("APP_HOST", DEFAULT_HOST),
            port: get_optional_env_parsed("APP_PORT", DEFAULT_PORT)?,
            jwt_secret,
            token_ttl_secs,
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            gemini,
        })
    }
}

/// Gets a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Gets an optional environment variable with a default value.
fn get_optional_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Gets an optional environment variable and parses it.
fn get_optional_env_parsed<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    env::var(key).map_or_else(
        |_| Ok(default),
        |value| {
            value
                .parse()
                .map_err(|error: ParseIntError| ConfigError::InvalidValue {
                    key: key.to_owned(),
                    message: error.to_string(),
                })
        },
    )
}
