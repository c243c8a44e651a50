use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::truncate::TruncateOptions;
use crate::utils::DEFAULT_SEPARATOR;

/// Name of the config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "wordcut.toml";

/// Command line defaults read from a TOML file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Character limit used when `--limit` is not given
    pub default_limit: Option<usize>,

    /// Word separator used to find cut points
    pub separator: char,

    /// Truncate each input line on its own
    pub per_line: bool,

    /// Print JSON records instead of plain text
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // No implicit budget, the limit must come from somewhere
            default_limit: None,

            // Cut on spaces
            separator: DEFAULT_SEPARATOR,

            // Whole input is one item
            per_line: false,

            // Plain text output
            json: false,
        }
    }
}

impl Config {
    /// Load configuration from the default locations
    ///
    /// Searches in the following order:
    /// 1. ./wordcut.toml (current directory)
    /// 2. $XDG_CONFIG_HOME/wordcut/config.toml (or equivalent on other platforms)
    /// 3. Falls back to default config if none found
    pub fn load() -> Result<Self> {
        // Try current directory first
        let local_config = Path::new(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Self::load_from_file(local_config)
                .context("Failed to load config from current directory");
        }

        // Try user config directory
        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::load_from_file(&user_config)
                    .context("Failed to load config from user config directory");
            }
        }

        // No config file found, return default
        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Open and read the file
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        // Parse TOML
        let config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse TOML config from: {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        // Serialize to TOML
        let toml_str = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;

        // Write to file
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create config file: {}", path.display()))?;

        file.write_all(toml_str.as_bytes())
            .with_context(|| format!("Failed to write config to: {}", path.display()))?;

        Ok(())
    }

    /// Generate a default configuration file in the user's config directory
    pub fn create_default_config() -> Result<PathBuf> {
        let config_path = Self::user_config_path()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        // Write defaults to the user config path
        Config::default().save_to_file(&config_path)?;

        Ok(config_path)
    }

    /// Path of the per-user config file, if the platform has a config dir
    pub fn user_config_path() -> Option<PathBuf> {
        // Platform specific, e.g. ~/.config/wordcut on Linux
        ProjectDirs::from("com", "wordcut", "wordcut")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Truncation options described by this config
    pub fn truncate_options(&self) -> TruncateOptions {
        TruncateOptions::with_separator(self.separator)
    }
}
