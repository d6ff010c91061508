//! Connection settings resolution and validation

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{credentials, defaults, environments};
use crate::error::{ConnectorError, Result};

/// Optional settings read from the config file
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct FileConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub environment: Option<String>,
}

impl FileConfig {
    /// Default config file path (~/.avalara-connector/config.json)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(credentials::DIR_NAME).join(credentials::FILE_NAME))
    }

    /// Load settings from `path`.
    /// Returns Default if the file doesn't exist, errors on corrupt JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ConnectorError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ConnectorError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Validated settings needed to construct a client
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorConfig {
    pub username: String,
    pub password: String,
    pub environment: String,
}

impl ConnectorConfig {
    /// Resolve settings with fallback:
    /// 1. CLI argument or environment variable (clap fills both)
    /// 2. Config file
    /// 3. Default environment
    pub fn resolve(
        username: Option<&str>,
        password: Option<&str>,
        environment: Option<&str>,
        file: &FileConfig,
    ) -> Self {
        let pick = |cli: Option<&str>, file: &Option<String>| {
            cli.map(str::to_string)
                .or_else(|| file.clone())
                .unwrap_or_default()
        };

        let environment = pick(environment, &file.environment);
        Self {
            username: pick(username, &file.username),
            password: pick(password, &file.password),
            environment: if environment.is_empty() {
                defaults::ENVIRONMENT.to_string()
            } else {
                environment
            },
        }
    }

    /// Reject incomplete credentials and unknown environments before any request
    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ConnectorError::Config(format!(
                "both username and password are required (use --username/--password or {}/{})",
                credentials::USERNAME_ENV_VAR,
                credentials::PASSWORD_ENV_VAR
            )));
        }

        let environment = self.environment.to_lowercase();
        let recognized = [
            environments::PRODUCTION,
            environments::SANDBOX,
            environments::TEST,
        ];
        if !recognized.contains(&environment.as_str())
            && !environment.starts_with("http://")
            && !environment.starts_with("https://")
        {
            return Err(ConnectorError::Config(format!(
                "invalid environment '{}': must be one of production, sandbox, test or an http(s) URL",
                self.environment
            )));
        }

        Ok(())
    }

    /// Environment selector normalized for base URL resolution
    pub fn environment_selector(&self) -> String {
        if self.environment.to_lowercase().starts_with("http") {
            self.environment.clone()
        } else {
            self.environment.to_lowercase()
        }
    }
}
