//! Wayfarer configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Currency;

/// Main Wayfarer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generative-text endpoint configuration
    pub gemini: GeminiConfig,

    /// Flight search configuration
    pub flights: FlightsConfig,
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .wayfarer.yml
        let local_config = PathBuf::from(".wayfarer.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/wayfarer/wayfarer.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("wayfarer").join("wayfarer.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Generative-text endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout_ms: 30_000,
        }
    }
}

/// Flight search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightsConfig {
    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// Currency flight prices are denominated in
    pub currency: Currency,
}

impl Default for FlightsConfig {
    fn default() -> Self {
        Self {
            api_key_env: "FLIGHTS_API_KEY".to_string(),
            currency: Currency::Usd,
        }
    }
}

/// Resolved API credentials, read from the environment exactly once
///
/// Absence is carried as None and surfaces later as MissingCredential from
/// the operation that needed the key. Empty values count as absent.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub gemini_api_key: Option<String>,
    pub flights_api_key: Option<String>,
}

impl Credentials {
    /// Read the env vars named by the config
    pub fn resolve(config: &Config) -> Self {
        Self {
            gemini_api_key: read_env_key(&config.gemini.api_key_env),
            flights_api_key: read_env_key(&config.flights.api_key_env),
        }
    }
}

fn read_env_key(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.gemini.base_url, "https://generativelanguage.googleapis.com");
        assert_eq!(config.gemini.timeout_ms, 30_000);
        assert_eq!(config.flights.api_key_env, "FLIGHTS_API_KEY");
        assert_eq!(config.flights.currency, Currency::Usd);
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
gemini:
  model: gemini-2.0-flash
  api-key-env: MY_GEMINI_KEY
  base-url: https://example.com
  timeout-ms: 5000

flights:
  api-key-env: MY_FLIGHTS_KEY
  currency: EUR
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.gemini.timeout_ms, 5000);
        assert_eq!(config.flights.api_key_env, "MY_FLIGHTS_KEY");
        assert_eq!(config.flights.currency, Currency::Eur);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
gemini:
  model: gemini-1.5-pro
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.gemini.model, "gemini-1.5-pro");

        // Defaults for unspecified
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.flights.currency, Currency::Usd);
    }

    #[test]
    #[serial]
    fn test_resolve_treats_empty_as_absent() {
        let config = Config::default();

        unsafe {
            std::env::set_var("GEMINI_API_KEY", "");
            std::env::remove_var("FLIGHTS_API_KEY");
        }
        let credentials = Credentials::resolve(&config);
        assert!(credentials.gemini_api_key.is_none());
        assert!(credentials.flights_api_key.is_none());

        unsafe {
            std::env::set_var("GEMINI_API_KEY", "abc123");
        }
        let credentials = Credentials::resolve(&config);
        assert_eq!(credentials.gemini_api_key.as_deref(), Some("abc123"));

        unsafe {
            std::env::remove_var("GEMINI_API_KEY");
        }
    }
}
