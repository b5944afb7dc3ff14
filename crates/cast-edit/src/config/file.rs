//! File-based configuration loading.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::EditConfig;
use super::env::config_dir;
use crate::error::ConfigError;

/// File name looked up in the search paths.
pub const CONFIG_FILE_NAME: &str = "cast-edit.toml";

/// Configuration loader.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    /// Directories searched by [`ConfigLoader::find`], in order.
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader with no search paths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader searching the working directory, then the user
    /// configuration directory.
    #[must_use]
    pub fn with_default_paths() -> Self {
        let loader = Self::new().add_path(".");
        match config_dir() {
            Some(dir) => loader.add_path(dir.join("cast-edit")),
            None => loader,
        }
    }

    /// Add a search path.
    #[must_use]
    pub fn add_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Find the first existing config file named `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    }

    /// Load configuration from a file.
    pub fn load(&self, path: &Path) -> Result<EditConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse_config(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Load [`CONFIG_FILE_NAME`] from the search paths, if present.
    pub fn load_default(&self) -> Result<Option<EditConfig>, ConfigError> {
        self.find(CONFIG_FILE_NAME)
            .map(|path| self.load(&path))
            .transpose()
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<EditConfig, toml::de::Error> {
    toml::from_str(content)
}
