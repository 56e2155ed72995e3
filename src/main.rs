//! CLI entry point for grants-migrate

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grants_migrate::Migrator;

#[derive(Parser)]
#[command(name = "grants-migrate")]
#[command(version)]
#[command(about = "Migrate grants to multi-author format", long_about = None)]
struct Cli {
    /// Show changes without modifying files
    #[arg(long)]
    dry_run: bool,

    /// Process a single file
    #[arg(long)]
    file: Option<PathBuf>,

    /// Set the base directory (defaults to current directory)
    #[arg(short, long)]
    cwd: Option<PathBuf>,

    /// Grants directory (defaults to `grants_dir` from _migrate.yml, or _grants)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "grants_migrate=debug,info"
    } else {
        "grants_migrate=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut migrator = Migrator::new(&base_dir)?;
    if let Some(dir) = cli.dir {
        migrator = migrator.with_grants_dir(dir);
    }

    tracing::debug!("Base directory {:?}, grants in {:?}", base_dir, migrator.grants_dir);

    match cli.file {
        Some(file) => {
            migrator.migrate_file(&file, cli.dry_run)?;
        }
        None => {
            if cli.dry_run {
                tracing::info!("Dry run, no files will be modified");
            }
            migrator.migrate(cli.dry_run)?;
        }
    }

    Ok(())
}
