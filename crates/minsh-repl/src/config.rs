//! Shell configuration.
//!
//! Loaded from `~/.config/minsh/config.toml` (the platform equivalent via
//! `directories`), or from the file named by `MINSH_CONFIG`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MINSH_CONFIG";

/// Configuration for the interactive shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Text printed after the working directory in the prompt.
    pub prompt_suffix: String,

    /// Show the home directory prefix as `~` in the prompt.
    pub abbreviate_home: bool,

    /// Consecutive failed reads (end of input, I/O errors) before the
    /// shell gives up and exits.
    pub max_read_failures: u32,

    /// Number of lines kept in the in-memory line editor history.
    pub history_size: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt_suffix: "$ ".to_string(),
            abbreviate_home: true,
            max_read_failures: 5,
            history_size: 1000,
        }
    }
}

impl ShellConfig {
    /// Load configuration from `MINSH_CONFIG` or the default path.
    ///
    /// A missing default file yields the defaults; a file named by
    /// `MINSH_CONFIG` must exist.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(Path::new(&path));
        }

        let Some(path) = Self::config_path() else {
            tracing::debug!("no config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// The default config file path, if the platform has a config directory.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "minsh").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
