//! Configuration management for the storefront.
//!
//! Loads configuration from environment variables with sensible defaults.
//! The binary first loads a `.env` file from the working directory, if one
//! exists. Unlike unset variables, values that are present but malformed
//! are reported as [`ConfigError`].

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Which backend the game service talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    /// The HTTP backend at [`ApiConfig::base_url`]
    #[default]
    Api,
    /// Built-in fixture catalog with simulated latency
    Mocks,
}

impl FromStr for ApiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "mocks" | "mock" => Ok(Self::Mocks),
            other => Err(format!("expected `api` or `mocks`, got `{other}`")),
        }
    }
}

impl fmt::Display for ApiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Api => "api",
            Self::Mocks => "mocks",
        })
    }
}

/// Storefront configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Backend access
    pub api: ApiConfig,
    /// Search-as-you-type tuning
    pub search: SearchConfig,
    /// Directory holding the persisted auth session
    pub session_dir: PathBuf,
}

/// Backend access configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// `api` or `mocks`
    pub mode: ApiMode,
    /// Base URL without trailing slash
    pub base_url: String,
    /// HTTP client timeout in milliseconds
    pub timeout_ms: u64,
    /// Simulated latency of fixture-backed services in milliseconds
    pub mock_latency_ms: u64,
}

impl ApiConfig {
    /// HTTP client timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Fixture latency
    #[must_use]
    pub const fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }
}

/// Search-as-you-type configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before searching
    pub debounce_ms: u64,
    /// Minimum trimmed query length that triggers a search
    pub min_chars: usize,
    /// Maximum results requested
    pub limit: u32,
}

impl SearchConfig {
    /// Debounce window
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_chars: 2,
            limit: 5,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            mode: ApiMode::Api,
            base_url: "http://localhost:9090/api/v1".to_string(),
            timeout_ms: 15_000,
            mock_latency_ms: 300,
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            search: SearchConfig::default(),
            session_dir: PathBuf::from(".junimo-session"),
        }
    }
}

/// A present but unusable configuration value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The variable is set to a value that fails to parse or validate
    #[error("invalid value `{value}` for {var}: {reason}")]
    Invalid {
        /// Environment variable name
        var: &'static str,
        /// Offending value
        value: String,
        /// What went wrong
        reason: String,
    },
}

impl StorefrontConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set to a value that
    /// does not parse or validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set to a value that
    /// does not parse or validate.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let base_url = match lookup("JUNIMO_API_BASE_URL") {
            Some(raw) => validate_base_url(&raw)?,
            None => defaults.api.base_url,
        };

        let config = Self {
            api: ApiConfig {
                mode: parse_var(&lookup, "JUNIMO_API_MODE")?.unwrap_or(defaults.api.mode),
                base_url,
                timeout_ms: parse_var(&lookup, "JUNIMO_API_TIMEOUT_MS")?
                    .unwrap_or(defaults.api.timeout_ms),
                mock_latency_ms: parse_var(&lookup, "JUNIMO_MOCK_LATENCY_MS")?
                    .unwrap_or(defaults.api.mock_latency_ms),
            },
            search: SearchConfig {
                debounce_ms: parse_var(&lookup, "JUNIMO_SEARCH_DEBOUNCE_MS")?
                    .unwrap_or(defaults.search.debounce_ms),
                min_chars: parse_var(&lookup, "JUNIMO_SEARCH_MIN_CHARS")?
                    .unwrap_or(defaults.search.min_chars),
                limit: parse_var(&lookup, "JUNIMO_SEARCH_LIMIT")?.unwrap_or(defaults.search.limit),
            },
            session_dir: lookup("JUNIMO_SESSION_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map_or(defaults.session_dir, PathBuf::from),
        };

        if config.search.min_chars == 0 {
            return Err(invalid("JUNIMO_SEARCH_MIN_CHARS", "0", "must be at least 1"));
        }
        if config.search.limit == 0 {
            return Err(invalid("JUNIMO_SEARCH_LIMIT", "0", "must be at least 1"));
        }

        Ok(config)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(var)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|e: T::Err| invalid(var, &raw, &e.to_string()))
        })
        .transpose()
}

fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(url.to_string()),
        _ => Err(invalid(
            "JUNIMO_API_BASE_URL",
            raw,
            "must be an http:// or https:// URL",
        )),
    }
}

fn invalid(var: &'static str, value: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap_or_default();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:9090/api/v1");
        assert_eq!(config.api.timeout(), Duration::from_secs(15));
        assert_eq!(config.search.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_overrides() -> Result<(), ConfigError> {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("JUNIMO_API_MODE", "Mocks"),
            ("JUNIMO_API_BASE_URL", "https://shop.example.com/api/v1/"),
            ("JUNIMO_MOCK_LATENCY_MS", "0"),
            ("JUNIMO_SEARCH_MIN_CHARS", "3"),
            ("JUNIMO_SESSION_DIR", "/tmp/junimo"),
        ]))?;
        assert_eq!(config.api.mode, ApiMode::Mocks);
        assert_eq!(config.api.base_url, "https://shop.example.com/api/v1");
        assert_eq!(config.api.mock_latency_ms, 0);
        assert_eq!(config.search.min_chars, 3);
        assert_eq!(config.session_dir, PathBuf::from("/tmp/junimo"));
        Ok(())
    }

    #[test]
    fn test_env_file_configures_the_storefront() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# local backend\nJUNIMO_API_MODE=mocks\nJUNIMO_API_BASE_URL=\"http://localhost:5000/api/\"\n",
        )?;

        let vars: HashMap<String, String> = dotenvy::from_path_iter(&path)?.collect::<Result<_, _>>()?;
        let config = StorefrontConfig::from_lookup(|var| vars.get(var).cloned())?;
        assert_eq!(config.api.mode, ApiMode::Mocks);
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.search, SearchConfig::default());
        Ok(())
    }

    #[test]
    fn test_malformed_values_are_errors() {
        let err = StorefrontConfig::from_lookup(lookup(&[("JUNIMO_API_TIMEOUT_MS", "soon")]));
        assert!(matches!(
            err,
            Err(ConfigError::Invalid { var: "JUNIMO_API_TIMEOUT_MS", .. })
        ));

        let err = StorefrontConfig::from_lookup(lookup(&[("JUNIMO_API_MODE", "graphql")]));
        assert!(matches!(err, Err(ConfigError::Invalid { var: "JUNIMO_API_MODE", .. })));

        let err = StorefrontConfig::from_lookup(lookup(&[("JUNIMO_API_BASE_URL", "localhost:9090")]));
        assert!(matches!(
            err,
            Err(ConfigError::Invalid { var: "JUNIMO_API_BASE_URL", .. })
        ));

        let err = StorefrontConfig::from_lookup(lookup(&[("JUNIMO_SEARCH_LIMIT", "0")]));
        assert!(matches!(err, Err(ConfigError::Invalid { var: "JUNIMO_SEARCH_LIMIT", .. })));
    }
}
