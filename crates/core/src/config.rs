//! Profile configuration store
//!
//! Credentials for GrowthBook instances live in `~/.growthbook/config.toml`,
//! one table per profile:
//!
//! ```toml
//! [default]
//! apiKey = "secret_abc123"
//!
//! [staging]
//! apiKey = "secret_def456"
//! apiBaseUrl = "https://growthbook.staging.example.com"
//! ```
//!
//! The store is read-only here; profiles are written by `growthbook auth login`.

use crate::errors::ConfigError;
use crate::redaction;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Base URL of GrowthBook Cloud
pub const DEFAULT_API_BASE_URL: &str = "https://api.growthbook.io";

/// Profile used when none is specified
pub const DEFAULT_PROFILE: &str = "default";

/// Config directory name under the home directory
pub const CONFIG_DIR_NAME: &str = ".growthbook";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "GROWTHBOOK_CONFIG_DIR";

/// Credentials and endpoint for one GrowthBook instance
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileConfig {
    /// Secret API key sent as a bearer token
    #[serde(default)]
    pub api_key: String,
    /// Instance base URL, for self-hosted deployments
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl ProfileConfig {
    /// Resolve the effective API base URL.
    ///
    /// Precedence: explicit flag, then the profile's `apiBaseUrl`, then
    /// [`DEFAULT_API_BASE_URL`]. Trailing slashes are removed.
    pub fn effective_base_url(&self, flag: Option<&str>) -> String {
        let raw = flag
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                self.api_base_url
                    .as_deref()
                    .filter(|url| !url.trim().is_empty())
            })
            .unwrap_or(DEFAULT_API_BASE_URL);
        raw.trim().trim_end_matches('/').to_string()
    }
}

/// Location of the profile config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at an explicit directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Locate the config directory.
    ///
    /// Precedence: `override_dir` (the `--config-dir` flag), then the
    /// `GROWTHBOOK_CONFIG_DIR` environment variable, then `~/.growthbook`.
    pub fn locate(override_dir: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(dir) = override_dir {
            return Ok(Self::new(dir));
        }

        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(PathBuf::from(dir)));
        }

        let base_dirs = directories_next::BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(Self::new(base_dirs.home_dir().join(CONFIG_DIR_NAME)))
    }

    /// Full path of the config file
    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    /// Load a profile by name.
    ///
    /// Returns `Ok(None)` when the file or the profile does not exist, or when
    /// the profile has no API key. Only the requested profile has to be well formed.
    #[instrument(level = "debug", skip(self), fields(path = %self.config_path().display()))]
    pub fn load_profile(&self, name: &str) -> Result<Option<ProfileConfig>, ConfigError> {
        let path = self.config_path();
        if !path.exists() {
            debug!("Config file not found at {}", path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let table: toml::Table = toml::from_str(&content).map_err(|e| ConfigError::Parsing {
            path: path.clone(),
            message: e.message().to_string(),
        })?;

        let Some(value) = table.get(name) else {
            debug!("Profile '{}' not present in config", name);
            return Ok(None);
        };

        let profile: ProfileConfig =
            value
                .clone()
                .try_into()
                .map_err(|e: toml::de::Error| ConfigError::Parsing {
                    path: path.clone(),
                    message: format!("profile '{}': {}", name, e.message()),
                })?;

        if profile.api_key.trim().is_empty() {
            debug!("Profile '{}' has no apiKey", name);
            return Ok(None);
        }

        redaction::add_global_secret(&profile.api_key);
        debug!("Loaded profile '{}'", name);
        Ok(Some(profile))
    }

    /// Load a profile, turning an absent profile into the user-facing error.
    ///
    /// The default profile and named profiles produce different messages so the
    /// user knows whether the CLI was never configured or the name is wrong.
    pub fn resolve_profile(&self, name: &str) -> Result<ProfileConfig, ConfigError> {
        match self.load_profile(name)? {
            Some(profile) => Ok(profile),
            None if name == DEFAULT_PROFILE => Err(ConfigError::InvalidDefaultProfile),
            None => Err(ConfigError::ProfileNotFound {
                profile: name.to_string(),
            }),
        }
    }
}
