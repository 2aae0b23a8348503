use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub request: RequestConfig,
}

/// Model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model")]
    pub default: String,
}

/// Request payload configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_model() -> String {
    "claude-sonnet-4-5".to_string()
}

fn default_max_tokens() -> u32 {
    4096
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            default: default_model(),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
        }
    }
}

impl Config {
    /// Get the uigen home directory (~/.uigen)
    pub fn uigen_home() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".uigen"))
    }

    /// Get the config file path (~/.uigen/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::uigen_home()?.join("config.toml"))
    }

    /// Load configuration from `path` (or use defaults if not found)
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")?;

        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Write a default config to `path` unless a file is already there.
    ///
    /// Returns `false` when an existing file was left untouched.
    pub fn init_at(path: &Path) -> Result<bool> {
        if path.exists() {
            tracing::warn!("Config already exists at {:?}, leaving it untouched", path);
            return Ok(false);
        }

        Self::default().save_to(path)?;
        Ok(true)
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, model: Option<String>, max_tokens: Option<u32>) -> Self {
        if let Some(model) = model {
            self.model.default = model;
        }
        if let Some(max_tokens) = max_tokens {
            self.request.max_tokens = max_tokens;
        }
        self
    }
}
