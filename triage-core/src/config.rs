//! Configuration management for gh-triage
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (TRIAGE_*)
//! 3. Config file (~/.config/triage/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Settings for the external gh CLI and the acting identity
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GhConfig {
    /// Path to the gh executable
    pub path: String,

    /// GitHub username used as the assignee filter and for new issues
    pub username: Option<String>,

    /// Default repository (owner/repo) for new issues
    pub repo: Option<String>,
}

impl Default for GhConfig {
    fn default() -> Self {
        Self {
            path: "gh".to_string(),
            username: None,
            repo: None,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// gh CLI configuration
    pub gh: GhConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/triage/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("triage").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - TRIAGE_GH_PATH: Path to the gh executable
    /// - TRIAGE_USERNAME: Acting GitHub username
    /// - TRIAGE_REPO: Default repository for new issues
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var("TRIAGE_GH_PATH") {
            self.gh.path = path;
        }

        if let Ok(username) = std::env::var("TRIAGE_USERNAME") {
            self.gh.username = Some(username);
        }

        if let Ok(repo) = std::env::var("TRIAGE_REPO") {
            self.gh.repo = Some(repo);
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        gh_path: Option<String>,
        username: Option<String>,
        repo: Option<String>,
    ) -> Self {
        if let Some(path) = gh_path {
            self.gh.path = path;
        }

        if let Some(username) = username {
            self.gh.username = Some(username);
        }

        if let Some(repo) = repo {
            self.gh.repo = Some(repo);
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        gh_path: Option<String>,
        username: Option<String>,
        repo: Option<String>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(gh_path, username, repo))
    }
}
