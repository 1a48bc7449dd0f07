//! Table settings loaded from the config directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pawdesk_table::{ConfigError, TableConfig};
use thiserror::Error;

use crate::paths;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

/// Load `table.json` from the config directory.
///
/// A missing file, or a platform without a config directory, yields the
/// defaults.
pub fn load_table_config() -> Result<TableConfig, SettingsError> {
    match paths::table_config_file() {
        Some(path) => load_from(&path),
        None => {
            log::warn!("no config directory, using default table settings");
            Ok(TableConfig::default())
        }
    }
}

pub fn load_from(path: &Path) -> Result<TableConfig, SettingsError> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("{} not found, using default table settings", path.display());
            return Ok(TableConfig::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config = TableConfig::from_json_str(&json).map_err(|source| SettingsError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded table settings from {}", path.display());
    Ok(config)
}
