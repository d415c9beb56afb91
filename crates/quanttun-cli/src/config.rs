//! Configuration file management for quanttun.
//!
//! Provides a TOML-based config file at `~/.config/quanttun/config.toml` and
//! a resolution chain: CLI flag > env var > config file > default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quanttun_core::generator::GeneratorConfig;
use quanttun_store::config::{StoreConfig, default_data_dir};

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub generator: GeneratorSection,
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratorSection {
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Directory holding the storage file. Platform default when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl GeneratorSection {
    pub fn with_endpoint(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    GeneratorConfig::default().model
}

fn default_temperature() -> f32 {
    GeneratorConfig::default().temperature
}

fn default_max_tokens() -> u32 {
    GeneratorConfig::default().max_tokens
}

fn default_timeout_secs() -> u64 {
    GeneratorConfig::default().timeout_secs
}

/// Build the config file contents written by `quanttun init`.
pub fn init_file(endpoint: &str, data_dir: Option<&Path>) -> ConfigFile {
    ConfigFile {
        generator: GeneratorSection::with_endpoint(endpoint),
        storage: StorageSection {
            data_dir: data_dir.map(Path::to_path_buf),
        },
    }
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the quanttun config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/quanttun` or
/// `~/.config/quanttun`. We intentionally ignore the platform-specific
/// `dirs::config_dir()` (which returns `~/Library/Application Support` on
/// macOS).
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("quanttun");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("quanttun")
}

/// Return the path to the quanttun config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct QuanttunConfig {
    pub generator: GeneratorConfig,
    pub store: StoreConfig,
}

impl QuanttunConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config
    /// file > default.
    ///
    /// - Endpoint: `cli_endpoint` > `QUANTTUN_ENDPOINT` env >
    ///   `config_file.generator.endpoint` > the built-in default.
    /// - Data dir: `cli_data_dir` > `QUANTTUN_DATA_DIR` env >
    ///   `config_file.storage.data_dir` > the platform default.
    /// - Model, temperature, max_tokens, timeout: config file > default.
    pub fn resolve(cli_endpoint: Option<&str>, cli_data_dir: Option<&Path>) -> Result<Self> {
        let file_config = load_config().ok();
        Ok(Self::resolve_with(cli_endpoint, cli_data_dir, file_config))
    }

    fn resolve_with(
        cli_endpoint: Option<&str>,
        cli_data_dir: Option<&Path>,
        file_config: Option<ConfigFile>,
    ) -> Self {
        let mut generator = GeneratorConfig::default();
        if let Some(ref cfg) = file_config {
            generator.endpoint = cfg.generator.endpoint.clone();
            generator.model = cfg.generator.model.clone();
            generator.temperature = cfg.generator.temperature;
            generator.max_tokens = cfg.generator.max_tokens;
            generator.timeout_secs = cfg.generator.timeout_secs;
        }
        if let Ok(endpoint) = std::env::var("QUANTTUN_ENDPOINT") {
            generator.endpoint = endpoint;
        }
        if let Some(endpoint) = cli_endpoint {
            generator.endpoint = endpoint.to_string();
        }

        let data_dir = if let Some(dir) = cli_data_dir {
            dir.to_path_buf()
        } else if let Ok(dir) = std::env::var("QUANTTUN_DATA_DIR") {
            PathBuf::from(dir)
        } else if let Some(dir) = file_config.and_then(|cfg| cfg.storage.data_dir) {
            dir
        } else {
            default_data_dir()
        };

        Self {
            generator,
            store: StoreConfig::new(data_dir),
        }
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
