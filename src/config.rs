//! Configuration management for rosterm
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_DIRECTORY_URL, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_STATE, DEFAULT_TIMEOUT_SECS,
    MAX_TIMEOUT_SECS, PAGE_SIZE_OPTIONS, US_STATES,
};
use crate::search::SearchCriterion;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub directory: DirectoryConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Directory service connection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Directory implementation: "http" or "memory"
    pub kind: String,
    /// Base URL of the directory REST API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Name of an environment variable holding a bearer token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token_env: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Rows per page in the employee table
    pub page_size: usize,
    /// Search criterion selected on startup
    pub default_criterion: String,
    /// State preselected in the state search selector
    pub default_state: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file
    pub enabled: bool,
    /// Minimum level written to the file
    pub level: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            kind: "http".to_string(),
            base_url: DEFAULT_DIRECTORY_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_token_env: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_criterion: SearchCriterion::Everyone.label().to_string(),
            default_state: DEFAULT_SEARCH_STATE.to_string(),
            mouse_enabled: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("rosterm.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("rosterm").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.validate_directory()?;

        if !PAGE_SIZE_OPTIONS.contains(&self.ui.page_size) {
            anyhow::bail!(
                "page_size must be one of {:?}, got {}",
                PAGE_SIZE_OPTIONS,
                self.ui.page_size
            );
        }

        if SearchCriterion::parse(&self.ui.default_criterion).is_none() {
            anyhow::bail!(
                "default_criterion '{}' is not one of: {}",
                self.ui.default_criterion,
                SearchCriterion::ALL.iter().map(|c| c.label()).collect::<Vec<_>>().join(", ")
            );
        }

        if !US_STATES.contains(&self.ui.default_state.as_str()) {
            anyhow::bail!("default_state '{}' is not a known state", self.ui.default_state);
        }

        self.logging.level_filter()?;

        Ok(())
    }

    fn validate_directory(&self) -> Result<()> {
        match self.directory.kind.as_str() {
            "http" => {
                if self.directory.base_url.is_empty() {
                    anyhow::bail!("directory.base_url cannot be empty");
                }
                reqwest::Url::parse(&self.directory.base_url)
                    .with_context(|| format!("directory.base_url '{}' is not a valid URL", self.directory.base_url))?;
            }
            "memory" => {}
            kind => anyhow::bail!("unsupported directory kind '{}'", kind),
        }

        if self.directory.timeout_secs == 0 || self.directory.timeout_secs > MAX_TIMEOUT_SECS {
            anyhow::bail!(
                "timeout_secs must be between 1 and {}, got {}",
                MAX_TIMEOUT_SECS,
                self.directory.timeout_secs
            );
        }

        if let Some(var) = &self.directory.api_token_env {
            if var.is_empty() {
                anyhow::bail!("api_token_env cannot be empty when set");
            }
        }

        Ok(())
    }

    /// Criterion selected on startup
    pub fn default_criterion(&self) -> SearchCriterion {
        SearchCriterion::from_label(&self.ui.default_criterion)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# rosterm Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("rosterm"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
