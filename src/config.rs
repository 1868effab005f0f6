use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::checker::ShortFilePolicy;
use crate::error::{HeaderGuardError, Result};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Config file discovered in the current directory.
pub const LOCAL_CONFIG_NAME: &str = ".header-guard.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config format version. Unset means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub header: HeaderConfig,
}

/// Scanner configuration for file discovery.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Glob patterns excluded from the walk.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Header rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Suffix that marks a file as a candidate.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Fixed-width comment marker preceding the declared name.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Policy for candidate files with fewer than two lines.
    #[serde(default)]
    pub short_files: ShortFilePolicy,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            marker: default_marker(),
            short_files: ShortFilePolicy::default(),
        }
    }
}

fn default_extension() -> String {
    ".swift".to_string()
}

/// The Xcode template header prefix: `//` plus two spaces.
fn default_marker() -> String {
    "//  ".to_string()
}

fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(HeaderGuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn parse(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config_version(&config)?;
        Ok(config)
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let path = Path::new(LOCAL_CONFIG_NAME);
        if path.exists() {
            self.load_from_path(path)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content =
            std::fs::read_to_string(path).map_err(|source| HeaderGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&content)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
