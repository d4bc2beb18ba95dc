//! User configuration for netroute (stored in ~/.config/netroute/config.toml)
//!
//! Every section is optional. A missing file yields [`Config::default`], and
//! command-line flags override whatever is loaded here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};

const CONFIG_DIR: &str = "netroute";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "NETROUTE_CONFIG_DIR";
const TOPOLOGY_DIR: &str = "topologies";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub simulate: SimulateConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Defaults applied to `route`, `compare` and `request`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_algorithm")]
    pub default_algorithm: String,
    #[serde(default)]
    pub directed: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_algorithm: default_algorithm(),
            directed: false,
        }
    }
}

fn default_algorithm() -> String {
    "dijkstra".to_string()
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Topology directory, overrides the platform data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateConfig {
    /// Pause between replay steps
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    300
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_nodes")]
    pub nodes: usize,
    #[serde(default = "default_density")]
    pub density: f64,
    #[serde(default = "default_max_weight")]
    pub max_weight: f64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            nodes: default_nodes(),
            density: default_density(),
            max_weight: default_max_weight(),
        }
    }
}

fn default_nodes() -> usize {
    20
}

fn default_density() -> f64 {
    0.1
}

fn default_max_weight() -> f64 {
    10.0
}

impl Config {
    fn config_dir() -> Result<PathBuf> {
        // Environment override keeps tests away from the real home directory
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Ok(PathBuf::from(env_dir));
        }
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR))
            .ok_or_else(|| RouteError::Other("unable to determine config directory".to_string()))
    }

    /// Path of the config file that [`Config::load`] reads
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| RouteError::io_operation("read config", path.display(), e))?;

        toml::from_str(&content).map_err(|e| RouteError::FailedOperation {
            operation: format!("parse config {}", path.display()),
            reason: e.to_string(),
        })
    }

    /// Topology store directory: the configured path, or
    /// `<data dir>/netroute/topologies`
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(path) = &self.store.path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(CONFIG_DIR).join(TOPOLOGY_DIR))
            .ok_or_else(|| RouteError::Other("unable to determine data directory".to_string()))
    }
}
