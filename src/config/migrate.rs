//! Migration configuration (_migrate.yml)

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{MigrateError, Result};

/// Main migration configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MigrateConfig {
    /// Directory holding the grant files, relative to the base directory
    pub grants_dir: String,
    /// Files whose name starts with this prefix are never migrated
    pub skip_prefix: String,
    /// Layout given to migrated records that have none
    pub default_layout: String,
}

impl Default for MigrateConfig {
    fn default() -> Self {
        Self {
            grants_dir: "_grants".to_string(),
            skip_prefix: "test_".to_string(),
            default_layout: "grant".to_string(),
        }
    }
}

impl MigrateConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MigrateError::io(path, e))?;
        let config: MigrateConfig =
            serde_yaml::from_str(&content).map_err(|source| MigrateError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config)
    }
}
