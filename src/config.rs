//! Configuration management for Tabulist
//!
//! This module handles loading, parsing, and validation of configuration files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::column::{SortDirection, SortSpec};
use crate::constants::{
    CONFIG_GENERATED, DEFAULT_BACKEND_URL, DEFAULT_ENDPOINT, DEFAULT_LOG_FILE, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE, SCROLL_THRESHOLD_DEFAULT, SCROLL_THRESHOLD_MAX, SCROLL_THRESHOLD_MIN,
};
use crate::table::TableOptions;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub table: TableConfig,
    pub source: SourceConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Table behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows requested per page
    pub page_size: u64,
    /// Sort the loaded rows in memory instead of re-requesting from the server
    pub sort_locally: bool,
    /// Column to sort by on startup (defaults to the first sortable column)
    pub initial_sort_column: Option<String>,
    /// Direction for the startup sort: "asc" or "desc"
    pub initial_sort_direction: SortDirection,
}

/// Remote source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of the backend
    pub base_url: String,
    /// Endpoint serving the table rows, relative to the base URL
    pub endpoint: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Distance from the bottom row (in rows) that triggers the next page load
    pub scroll_threshold: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Log file path (the TUI owns the terminal, so logs go to a file)
    pub file: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort_locally: false,
            initial_sort_column: None,
            initial_sort_direction: SortDirection::Asc,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            scroll_threshold: SCROLL_THRESHOLD_DEFAULT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: DEFAULT_LOG_FILE.to_string(),
        }
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
        let current_dir_config = PathBuf::from("tabulist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("tabulist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.table.page_size == 0 || self.table.page_size > MAX_PAGE_SIZE {
            anyhow::bail!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE,
                self.table.page_size
            );
        }

        if self.ui.scroll_threshold < SCROLL_THRESHOLD_MIN
            || self.ui.scroll_threshold > SCROLL_THRESHOLD_MAX
        {
            anyhow::bail!(
                "scroll_threshold must be between {} and {} rows, got {}",
                SCROLL_THRESHOLD_MIN,
                SCROLL_THRESHOLD_MAX,
                self.ui.scroll_threshold
            );
        }

        if let Err(e) = reqwest::Url::parse(&self.source.base_url) {
            anyhow::bail!("Invalid base_url '{}': {}", self.source.base_url, e);
        }
        if self.source.endpoint.is_empty() {
            anyhow::bail!("endpoint cannot be empty");
        }

        if self.logging.enabled && self.logging.file.is_empty() {
            anyhow::bail!("logging is enabled but no log file is set");
        }

        Ok(())
    }

    /// Resolve the table-related settings into controller options
    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            page_size: self.table.page_size,
            sort_locally: self.table.sort_locally,
            initial_sort: self
                .table
                .initial_sort_column
                .as_ref()
                .map(|id| SortSpec::new(id.clone(), self.table.initial_sort_direction)),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content =
            toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Tabulist Configuration File\n# Generated on {}\n\n",
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
            .map(|dir| dir.join("tabulist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
