use std::fs;
use std::path::Path;

use super::types::BenchConfig;
use crate::error::BenchError;

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: BenchConfig,
    pub config_exists: bool,
}

/// Reads the TOML file at `path`, falling back to defaults when it is absent.
pub fn load_config(path: &Path) -> Result<LoadedConfig, BenchError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(LoadedConfig {
            config: toml::from_str(&contents)?,
            config_exists: true,
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(LoadedConfig {
            config: BenchConfig::default(),
            config_exists: false,
        }),
        Err(err) => Err(BenchError::Config(format!(
            "cannot read {}: {err}",
            path.display()
        ))),
    }
}
