//! JSON config file adapter.
//!
//! Implements [`ConfigPort`] by reading a [`PetConfig`] from a JSON file.
//! Missing fields take their defaults; the result is validated before it
//! is handed to the engine.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::PetConfig;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "POCKETPET_CONFIG";

pub struct JsonConfigFile {
    path: PathBuf,
}

impl JsonConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file named by `POCKETPET_CONFIG`, if the variable is set.
    pub fn from_env() -> Option<Self> {
        std::env::var_os(CONFIG_ENV).map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse and validate a JSON document.
    pub fn parse(text: &str) -> Result<PetConfig, ConfigError> {
        let cfg: PetConfig = serde_json::from_str(text).map_err(|e| {
            warn!("JsonConfigFile: parse error: {}", e);
            ConfigError::Corrupted
        })?;
        cfg.validate()?;
        Ok(cfg)
    }
}

impl ConfigPort for JsonConfigFile {
    fn load(&self) -> Result<PetConfig, ConfigError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound,
            _ => ConfigError::IoError,
        })?;
        let cfg = Self::parse(&text)?;
        info!("JsonConfigFile: loaded {}", self.path.display());
        Ok(cfg)
    }
}
