//! Migrate grant files to the multi-author format

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{migrate_text, Migration};
use crate::error::MigrateError;
use crate::Migrator;

/// Outcome for a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Rewritten, or would be in dry-run mode
    Migrated,
    Skipped,
}

/// Counts for a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub migrated: usize,
    pub skipped: usize,
}

impl Summary {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Migrated => self.migrated += 1,
            FileOutcome::Skipped => self.skipped += 1,
        }
    }
}

/// Migrate every grant file in the grants directory
pub fn run(migrator: &Migrator, dry_run: bool) -> Result<Summary> {
    migrator.ensure_grants_dir()?;

    println!("Scanning {} for grant files...", migrator.grants_dir.display());

    let mut summary = Summary::default();

    for path in grant_files(&migrator.grants_dir)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if name.starts_with(&migrator.config.skip_prefix) {
            println!("  SKIP: {} - Test file", name);
            summary.skipped += 1;
            continue;
        }

        match migrate_file(migrator, &path, dry_run) {
            Ok(outcome) => summary.record(outcome),
            Err(e) => {
                tracing::warn!("Failed to migrate {:?}: {:#}", path, e);
                summary.skipped += 1;
            }
        }
    }

    println!(
        "\nSummary: {} files {}migrated, {} skipped",
        summary.migrated,
        if dry_run { "would be " } else { "" },
        summary.skipped
    );

    Ok(summary)
}

/// Migrate one explicitly named file
pub fn run_file(migrator: &Migrator, file: &Path, dry_run: bool) -> Result<FileOutcome> {
    migrator.ensure_grants_dir()?;

    let path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        migrator.base_dir.join(file)
    };

    if !path.exists() {
        return Err(MigrateError::FileNotFound(path).into());
    }

    migrate_file(migrator, &path, dry_run)
}

/// Read, convert and (unless `dry_run`) rewrite a single file
pub fn migrate_file(migrator: &Migrator, path: &Path, dry_run: bool) -> Result<FileOutcome> {
    let content = fs::read_to_string(path).map_err(|e| MigrateError::io(path, e))?;

    match migrate_text(&content, &migrator.config.default_layout) {
        Migration::NoFrontMatter => {
            println!("  SKIP: {} - No YAML frontmatter found", path.display());
            Ok(FileOutcome::Skipped)
        }
        Migration::Skipped(reason) => {
            tracing::debug!("Skipping {:?}: {:?}", path, reason);
            println!(
                "  SKIP: {} - Already in new format or no author field",
                path.display()
            );
            Ok(FileOutcome::Skipped)
        }
        Migration::Migrated { authors, content } => {
            if dry_run {
                println!("  WOULD MIGRATE: {}", path.display());
                println!("    Authors: {}", format_name_list(&authors));
                return Ok(FileOutcome::Migrated);
            }

            write_atomic(path, &content)?;
            println!("  MIGRATED: {}", path.display());
            Ok(FileOutcome::Migrated)
        }
    }
}

/// Render names as `['A', 'B']`. A name containing `'` but no `"` is
/// wrapped in double quotes instead.
fn format_name_list(names: &[String]) -> String {
    let quoted: Vec<String> = names
        .iter()
        .map(|name| {
            if name.contains('\'') && !name.contains('"') {
                format!("\"{}\"", name.replace('\\', "\\\\"))
            } else {
                format!(
                    "'{}'",
                    name.replace('\\', "\\\\").replace('\'', "\\'")
                )
            }
        })
        .collect();
    format!("[{}]", quoted.join(", "))
}

/// Markdown files directly inside `dir`, sorted by name
fn grant_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.md", glob::Pattern::escape(&dir.to_string_lossy()));

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("Invalid pattern {}", pattern))? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => tracing::warn!("Cannot read {:?}: {}", e.path(), e.error()),
        }
    }

    files.sort();
    Ok(files)
}

/// Write to a sibling temp file, then rename it over `path`
fn write_atomic(path: &Path, content: &str) -> Result<(), MigrateError> {
    let mut tmp_path = OsString::from(path.as_os_str());
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);

    fs::write(&tmp_path, content).map_err(|e| MigrateError::io(&tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| MigrateError::io(path, e))
}
