//! grants-migrate: move grant files from single-author to multi-author frontmatter
//!
//! Legacy grant files carry one `author` string (with `ORCID` and
//! `institution` alongside). This crate rewrites them to carry a structured
//! `authors` list instead, leaving the markdown body untouched.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;

use std::path::{Path, PathBuf};

pub use error::{MigrateError, Result};

/// Config file looked up in the base directory
pub const CONFIG_FILE: &str = "_migrate.yml";

/// The resolved migration setup
#[derive(Debug, Clone)]
pub struct Migrator {
    /// Migration configuration
    pub config: config::MigrateConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Directory holding the grant files
    pub grants_dir: PathBuf,
}

impl Migrator {
    /// Create a new migrator rooted at a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::MigrateConfig::load(&config_path)?
        } else {
            config::MigrateConfig::default()
        };

        let grants_dir = base_dir.join(&config.grants_dir);

        Ok(Self {
            config,
            base_dir,
            grants_dir,
        })
    }

    /// Use a different grants directory. Relative paths resolve against the
    /// base directory.
    pub fn with_grants_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.grants_dir = self.base_dir.join(dir);
        self
    }

    /// Fail unless the grants directory exists
    pub fn ensure_grants_dir(&self) -> Result<()> {
        if self.grants_dir.is_dir() {
            Ok(())
        } else {
            Err(MigrateError::GrantsDirNotFound(self.grants_dir.clone()))
        }
    }

    /// Migrate every grant file
    pub fn migrate(&self, dry_run: bool) -> anyhow::Result<commands::migrate::Summary> {
        commands::migrate::run(self, dry_run)
    }

    /// Migrate a single file
    pub fn migrate_file<P: AsRef<Path>>(
        &self,
        file: P,
        dry_run: bool,
    ) -> anyhow::Result<commands::migrate::FileOutcome> {
        commands::migrate::run_file(self, file.as_ref(), dry_run)
    }
}
