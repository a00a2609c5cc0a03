use serde::{Deserialize, Serialize};
use std::path::Path;

use plasma_chain::config::ChainConfig;

use crate::error::NodeError;

/// File name written by [`NodeConfig::init`].
pub const CONFIG_FILE_NAME: &str = "plasma.toml";

/// Placeholder authority written into a fresh config file.
const DEFAULT_AUTHORITY: &str = "0x0000000000000000000000000000000000000000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub chain: ChainConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            chain: ChainConfig::new(DEFAULT_AUTHORITY),
            logging: LoggingConfig::default(),
        }
    }
}

impl NodeConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, NodeError> {
        let contents = std::fs::read_to_string(path).map_err(|e| NodeError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path, e),
        })?;
        let config: NodeConfig = toml::from_str(&contents).map_err(|e| NodeError::ConfigError {
            reason: format!("failed to parse config file '{}': {}", path, e),
        })?;
        Ok(config)
    }

    /// Initialize a default configuration file in the given directory.
    pub fn init(dir: &str) -> Result<(), NodeError> {
        let dir_path = Path::new(dir);
        if !dir_path.exists() {
            std::fs::create_dir_all(dir_path)?;
        }

        let config = NodeConfig::default();
        let toml_str = toml::to_string_pretty(&config).map_err(|e| NodeError::ConfigError {
            reason: format!("failed to serialize default config: {}", e),
        })?;

        std::fs::write(dir_path.join(CONFIG_FILE_NAME), toml_str)?;
        Ok(())
    }
}
