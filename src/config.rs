//! Configuration management for kitbox
//!
//! Settings are loaded from environment variables with sensible defaults.
//! Builder profiles can additionally be loaded from a TOML file and registered
//! as data-defined builders.
//!
//! # Environment Variables
//!
//! - `KITBOX_DEFAULT_FAMILY`: Family used when none is given - default: "Light"
//! - `KITBOX_DEFAULT_BUILDER`: Builder used when none is given - default: "Gaming"
//! - `KITBOX_PROFILES`: Path to a TOML file of builder profiles - default: unset
//! - `KITBOX_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Profile File
//!
//! ```toml
//! [builders.Workstation]
//! cpu = "AMD Ryzen 9"
//! gpu = "NVIDIA RTX 4090"
//! ram = "64 GB DDR5"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use kitbox::{KitConfig, Registry};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = KitConfig::default();
//! config.validate()?;
//!
//! let mut registry = Registry::with_defaults();
//! if let Some(profiles) = config.load_profiles()? {
//!     registry.register_profiles(&profiles.builders);
//! }
//! # Ok(())
//! # }
//! ```

use crate::kit::builder::BuildProfile;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default values for configuration
const DEFAULT_FAMILY: &str = "Light";
const DEFAULT_BUILDER: &str = "Gaming";
const DEFAULT_LOG_LEVEL: &str = "info";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Log level is not one of trace, debug, info, warn, error
    #[error("Invalid log level: {0}. Valid options: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Profile file could not be read
    #[error("Failed to read profile file {path}: {source}")]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Profile file is not valid TOML or has unknown fields
    #[error("Failed to parse profile file {path}: {source}")]
    ProfileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Builder profiles loaded from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileFile {
    #[serde(default)]
    pub builders: BTreeMap<String, BuildProfile>,
}

impl ProfileFile {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ProfileRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::ProfileParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Main configuration structure for kitbox
#[derive(Debug, Clone)]
pub struct KitConfig {
    /// Family key used when the caller doesn't name one
    pub default_family: String,

    /// Builder key used when the caller doesn't name one
    pub default_builder: String,

    /// Optional TOML file of builder profiles
    pub profiles_path: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for KitConfig {
    /// Loads from KITBOX_* environment variables, falling back to defaults
    fn default() -> Self {
        let default_family =
            env::var("KITBOX_DEFAULT_FAMILY").unwrap_or_else(|_| DEFAULT_FAMILY.to_string());

        let default_builder =
            env::var("KITBOX_DEFAULT_BUILDER").unwrap_or_else(|_| DEFAULT_BUILDER.to_string());

        let profiles_path = env::var("KITBOX_PROFILES")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("KITBOX_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            default_family,
            default_builder,
            profiles_path,
            log_level,
        }
    }
}

impl KitConfig {
    /// Validates the configuration
    ///
    /// Checks that default keys are non-empty and the log level is valid.
    /// Whether the default keys are actually registered is checked at resolve time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_family.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "default family must not be empty".to_string(),
            ));
        }

        if self.default_builder.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "default builder must not be empty".to_string(),
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.log_level.clone()));
        }

        Ok(())
    }

    /// Reads the profile file if one is configured
    pub fn load_profiles(&self) -> Result<Option<ProfileFile>, ConfigError> {
        match &self.profiles_path {
            Some(path) => {
                let profiles = ProfileFile::from_path(path)?;
                debug!(
                    path = %path.display(),
                    builders = profiles.builders.len(),
                    "Loaded builder profiles"
                );
                Ok(Some(profiles))
            }
            None => Ok(None),
        }
    }

    /// Key/value view for display
    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("default_family".to_string(), self.default_family.clone());
        map.insert("default_builder".to_string(), self.default_builder.clone());
        map.insert(
            "profiles_path".to_string(),
            self.profiles_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(none)".to_string()),
        );
        map.insert("log_level".to_string(), self.log_level.clone());
        map
    }
}

impl fmt::Display for KitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "KitConfig {{")?;
        writeln!(f, "  default_family: {}", self.default_family)?;
        writeln!(f, "  default_builder: {}", self.default_builder)?;
        match &self.profiles_path {
            Some(path) => writeln!(f, "  profiles_path: {}", path.display())?,
            None => writeln!(f, "  profiles_path: (none)")?,
        }
        writeln!(f, "  log_level: {}", self.log_level)?;
        write!(f, "}}")
    }
}
