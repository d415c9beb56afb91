use std::env;
use std::path::{Path, PathBuf};

/// Storage configuration.
///
/// Reads from the `QUANTTUN_DATA_DIR` environment variable, falling back to
/// the platform data directory (`~/.local/share/quanttun` on Linux) when
/// unset.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the storage file.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// File name of the single storage blob inside the data directory.
    pub const STORAGE_FILE: &str = "storage.json";

    /// Build a config from the environment.
    ///
    /// Priority: `QUANTTUN_DATA_DIR` env var, then the platform default.
    pub fn from_env() -> Self {
        let data_dir = env::var("QUANTTUN_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());
        Self { data_dir }
    }

    /// Build a config from an explicit directory (useful for tests and CLI flags).
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Full path to the storage file.
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(Self::STORAGE_FILE)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Platform default data directory: `<data_dir>/quanttun`, falling back to
/// the current directory when the platform dir cannot be determined.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("quanttun")
}
