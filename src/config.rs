use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{AlgoError, Result};
use crate::types::OutputFormat;

/// Name of the configuration file stored inside the `.classic-algos` directory.
pub const CONFIG_FILENAME: &str = "config.toml";

/// Name of the hidden directory holding classic-algos settings.
pub const CONFIG_DIR: &str = ".classic-algos";

/// Settings for the command-line front end.
///
/// None of these change what an algorithm computes; they control how
/// results are printed, how much is logged, and how far the exponential
/// Fibonacci recursion is allowed to go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgosConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// How results are rendered on stdout.
    pub format: OutputFormat,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Largest input accepted by the naive Fibonacci command.
    pub max_fibonacci_input: u32,
}

impl Default for AlgosConfig {
    fn default() -> Self {
        Self {
            version: 1,
            format: OutputFormat::Text,
            log_filter: "warn".to_string(),
            max_fibonacci_input: 40,
        }
    }
}

/// Returns the path to the `.classic-algos` directory within `root`.
pub fn get_config_dir(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR)
}

/// Returns the path to `config.toml` within the `.classic-algos` directory.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_config_dir(root).join(CONFIG_FILENAME)
}

/// Loads the configuration stored under `root`.
///
/// If the file does not exist, returns the default configuration.
pub fn load_config(root: &Path) -> Result<AlgosConfig> {
    let config_path = get_config_path(root);
    if !config_path.exists() {
        return Ok(AlgosConfig::default());
    }
    load_config_file(&config_path)
}

/// Loads the configuration from an explicit file path.
pub fn load_config_file(path: &Path) -> Result<AlgosConfig> {
    let contents = fs::read_to_string(path).map_err(|e| AlgoError::Config {
        message: format!("failed to read config file '{}': {}", path.display(), e),
    })?;

    toml::from_str(&contents).map_err(|e| AlgoError::Config {
        message: format!("failed to parse config file '{}': {}", path.display(), e),
    })
}

/// Saves the configuration under `root` using an atomic write.
///
/// Writes to a temporary file first and then renames it into place.
pub fn save_config(root: &Path, config: &AlgosConfig) -> Result<()> {
    let config_dir = get_config_dir(root);
    fs::create_dir_all(&config_dir).map_err(|e| AlgoError::Config {
        message: format!(
            "failed to create config directory '{}': {}",
            config_dir.display(),
            e
        ),
    })?;

    let config_path = get_config_path(root);
    let tmp_path = config_path.with_extension("tmp");

    let text = toml::to_string_pretty(config).map_err(|e| AlgoError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &text).map_err(|e| AlgoError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, &config_path).map_err(|e| AlgoError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            config_path.display(),
            e
        ),
    })?;

    Ok(())
}
