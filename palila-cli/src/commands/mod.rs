//! CLI command implementations.

pub mod build;
pub mod clean;
pub mod page;

pub use build::build_site;
pub use clean::clean_site;
pub use page::build_page;

use anyhow::{Context, Result};
use palila_core::Config;
use std::path::Path;

/// Load the config file when one was given, otherwise start empty.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {:?}", path);
            Config::from_file(path).context("Failed to load configuration")
        }
        None => Ok(Config::default()),
    }
}
