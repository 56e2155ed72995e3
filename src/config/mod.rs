//! Configuration module

mod migrate;

pub use migrate::MigrateConfig;
