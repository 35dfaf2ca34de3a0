use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::fs;

pub mod paths;
pub mod validation;

use paths::get_config_path;
use validation::validate_config;

/// Configuration structure for the application.
/// Holds everything the API client and the run need; passed around explicitly.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the RobotEvents API, including the `/api/v2` prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Bearer token for the API. Usually supplied through `API_KEY` rather than the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Season id sent with skills requests.
    #[serde(default = "default_season_id")]
    pub season_id: u32,
    /// HTTP timeout in seconds. Unset means the HTTP client's own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_timeout_seconds: Option<u64>,
    /// Give up after this many consecutive 429 responses. Unset retries forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rate_limit_retries: Option<u32>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

fn default_season_id() -> u32 {
    constants::DEFAULT_SEASON_ID
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            api_key: None,
            season_id: default_season_id(),
            http_timeout_seconds: None,
            max_rate_limit_retries: None,
            log_file_path: None,
        }
    }
}

// The API key never ends up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_domain", &self.api_domain)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("season_id", &self.season_id)
            .field("http_timeout_seconds", &self.http_timeout_seconds)
            .field("max_rate_limit_retries", &self.max_rate_limit_retries)
            .field("log_file_path", &self.log_file_path)
            .finish()
    }
}

impl Config {
    /// Loads configuration, layering defaults, an optional TOML file and the environment.
    ///
    /// # Arguments
    /// * `custom_path` - Config file given on the command line. It must exist.
    ///   Without it the default location is used if a file is present there.
    ///
    /// # Environment Variables
    /// - `API_KEY` - Bearer token (required unless set in the file)
    /// - `SKILLS_RANKED_API_DOMAIN` - Override API base URL
    /// - `SKILLS_RANKED_SEASON` - Override season id
    /// - `SKILLS_RANKED_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `SKILLS_RANKED_LOG_FILE` - Override log file path
    ///
    /// # Notes
    /// - A `.env` file is merged into the environment by `main` before this runs
    /// - Environment variables take precedence over config file values
    pub async fn load(custom_path: Option<&str>) -> Result<Self, AppError> {
        let mut config = match custom_path {
            Some(path) => Config::load_from_path(path).await?,
            None => {
                let default_path = get_config_path();
                if Path::new(&default_path).exists() {
                    Config::load_from_path(&default_path).await?
                } else {
                    Config::default()
                }
            }
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a file path without applying the environment.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies environment variable overrides on top of the current values.
    pub fn apply_env_overrides(&mut self) -> Result<(), AppError> {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = Some(api_key);
        }

        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(season) = std::env::var(env_vars::SEASON) {
            self.season_id = season.trim().parse().map_err(|_| {
                AppError::config_error(format!(
                    "{} must be a numeric season id, got '{season}'",
                    env_vars::SEASON
                ))
            })?;
        }

        if let Ok(timeout) = std::env::var(env_vars::HTTP_TIMEOUT) {
            let seconds = timeout.trim().parse::<u64>().map_err(|_| {
                AppError::config_error(format!(
                    "{} must be a whole number of seconds, got '{timeout}'",
                    env_vars::HTTP_TIMEOUT
                ))
            })?;
            self.http_timeout_seconds = Some(seconds);
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        Ok(())
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            self.api_key.as_deref(),
            &self.log_file_path,
        )
    }

    /// Returns the API key, or a configuration error if none was provided.
    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::config_error(format!(
                    "API key is missing; set {} in the environment or a .env file",
                    env_vars::API_KEY
                ))
            })
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }
}
