//! Run configuration for hypergraphs
//!
//! Defaults live in `config.toml`, looked up in order:
//! 1. an explicit path (must exist)
//! 2. `$HYPERGRAPHS_CONFIG_DIR/config.toml`
//! 3. `<platform config dir>/hypergraphs/config.toml`
//!
//! A missing implicit file yields the built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HypergraphError, Result};
use crate::graph::types::Concentration;

pub use types::{RunConfig, DEFAULT_CONCENTRATION, DEFAULT_REALISATIONS};

const CONFIG_DIR: &str = "hypergraphs";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "HYPERGRAPHS_CONFIG_DIR";

impl RunConfig {
    /// Path of the implicit config file, if a config directory can be determined
    pub fn default_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = match std::env::var_os(CONFIG_DIR_ENV_VAR) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }

    /// Resolve the configuration for one invocation
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(HypergraphError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: RunConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| HypergraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check field ranges
    pub fn validate(&self) -> Result<()> {
        Concentration::new(self.concentration)?;
        if self.realisations == 0 {
            return Err(HypergraphError::InvalidRealisations(self.realisations));
        }
        Ok(())
    }
}
