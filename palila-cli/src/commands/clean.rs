//! Clean command implementation.

use anyhow::{bail, Context, Result};
use palila_core::config::existing_dir;
use palila_core::{BuildError, Config, SiteBuilder};

/// Remove every generated page under the configured root
pub fn clean_site(config: &Config) -> Result<()> {
    let root = config.root_dir().context("No root folder given (use --root)")?;
    let root = existing_dir(&root)?;

    match SiteBuilder::new(config.build_options()).clean(&root) {
        Ok(report) => {
            tracing::info!("✓ Removed {} pages from {}", report.deleted.len(), root.display());
            Ok(())
        }
        Err(BuildError::PagesFailed(failures)) => {
            for failure in &failures {
                tracing::error!("{}: {}", failure.folder.display(), failure.error);
            }
            bail!("{} folder(s) could not be cleaned", failures.len())
        }
        Err(err) => Err(err).context("Failed to clean site"),
    }
}
