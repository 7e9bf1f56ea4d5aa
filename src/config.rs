//! Site configuration.
//!
//! An optional `config.toml` in the content root overrides the stock
//! defaults. The file is sparse: set only the keys you want to change.
//!
//! ```toml
//! title = "ブログ"                          # brand text and index page title
//! description = "月別アーカイブ一覧"          # index page meta description
//! credit = "Powered by GitHub Pages & Rust"  # footer credit line
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site name shown in the header and used as the index page title.
    pub title: String,
    /// Meta description of the index page.
    pub description: String,
    /// Second footer line.
    pub credit: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "ブログ".to_string(),
            description: "月別アーカイブ一覧".to_string(),
            credit: "Powered by GitHub Pages & Rust".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        Ok(())
    }
}

/// Load config from the content root and validate it.
///
/// A missing `config.toml` gives the defaults. Keys the file leaves out keep
/// their default values through `#[serde(default)]`.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str::<SiteConfig>(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A fully-commented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# monthlog configuration
# ======================
# Place this file in the content root (next to the YYYYMM/ folders).
# All settings are optional; values shown are the defaults.
# Unknown keys cause an error.

# Site name: header brand link and index page title.
title = "ブログ"

# Meta description of the index page.
description = "月別アーカイブ一覧"

# Second line of the page footer.
credit = "Powered by GitHub Pages & Rust"
"##
}
