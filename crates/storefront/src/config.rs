//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `FLORALINK_DATA_FILE` - JSON file backing the store (default: floralink-data.json)
//! - `FLORALINK_NAMESPACE` - Key prefix for every stored entry (default: `floralink_`)
//! - `FLORALINK_SESSION_HOURS` - Session lifetime in hours (default: 24)
//! - `FLORALINK_STORAGE_QUOTA_BYTES` - Maximum stored bytes; unlimited when unset
//! - `FLORALINK_SEED` - Install seed data on first run (default: true)

use std::path::PathBuf;

use thiserror::Error;

use crate::services::auth::DEFAULT_SESSION_TTL_HOURS;
use crate::storage::DEFAULT_NAMESPACE;

/// Data file used when `FLORALINK_DATA_FILE` is unset.
pub const DEFAULT_DATA_FILE: &str = "floralink-data.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Path of the JSON data file
    pub data_file: PathBuf,
    /// Prefix applied to every storage key
    pub namespace: String,
    /// How long a login session stays valid
    pub session_hours: u32,
    /// Optional storage quota in bytes
    pub storage_quota_bytes: Option<usize>,
    /// Whether to install seed data into an empty profile
    pub seed: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            namespace: DEFAULT_NAMESPACE.to_owned(),
            session_hours: DEFAULT_SESSION_TTL_HOURS,
            storage_quota_bytes: None,
            seed: true,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but can't be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_file = PathBuf::from(get_env_or_default("FLORALINK_DATA_FILE", DEFAULT_DATA_FILE));
        let namespace = get_env_or_default("FLORALINK_NAMESPACE", DEFAULT_NAMESPACE);

        let session_hours = match get_optional_env("FLORALINK_SESSION_HOURS") {
            Some(raw) => parse_positive::<u32>("FLORALINK_SESSION_HOURS", &raw)?,
            None => DEFAULT_SESSION_TTL_HOURS,
        };

        let storage_quota_bytes = get_optional_env("FLORALINK_STORAGE_QUOTA_BYTES")
            .map(|raw| parse_positive::<usize>("FLORALINK_STORAGE_QUOTA_BYTES", &raw))
            .transpose()?;

        let seed = match get_optional_env("FLORALINK_SEED") {
            Some(raw) => parse_bool("FLORALINK_SEED", &raw)?,
            None => true,
        };

        Ok(Self {
            data_file,
            namespace,
            session_hours,
            storage_quota_bytes,
            seed,
        })
    }

    /// Session lifetime as a duration.
    #[must_use]
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(i64::from(self.session_hours))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_owned())
}

/// Parse a strictly positive integer.
fn parse_positive<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default + PartialEq,
    T::Err: std::fmt::Display,
{
    let value = raw
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))?;
    if value == T::default() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            "must be greater than zero".to_owned(),
        ));
    }
    Ok(value)
}

/// Parse a boolean flag (`true/false`, `1/0`, `yes/no`).
fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.data_file, PathBuf::from("floralink-data.json"));
        assert_eq!(config.namespace, "floralink_");
        assert_eq!(config.session_hours, 24);
        assert_eq!(config.storage_quota_bytes, None);
        assert!(config.seed);
    }

    #[test]
    fn test_session_ttl() {
        let config = StorefrontConfig {
            session_hours: 2,
            ..StorefrontConfig::default()
        };
        assert_eq!(config.session_ttl(), chrono::Duration::hours(2));
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive::<u32>("X", " 12 ").unwrap(), 12);
        assert!(matches!(
            parse_positive::<u32>("X", "0"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
        assert!(parse_positive::<u32>("X", "-3").is_err());
        assert!(parse_positive::<usize>("X", "lots").is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(parse_bool("X", "yes").unwrap());
        assert!(!parse_bool("X", "0").unwrap());
        let err = parse_bool("FLORALINK_SEED", "maybe").unwrap_err();
        assert!(err.to_string().contains("FLORALINK_SEED"));
    }
}
