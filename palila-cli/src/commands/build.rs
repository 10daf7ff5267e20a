//! Build command implementation.

use anyhow::{bail, Context, Result};
use palila_core::{BuildError, Config, SiteBuilder};

/// Build every page under the configured root
pub fn build_site(config: &Config) -> Result<()> {
    let paths = config.validate().context("Invalid build settings")?;
    tracing::info!("root folder: {}", paths.root.display());
    tracing::info!("page template: {}", paths.template.display());

    let builder = SiteBuilder::new(config.build_options());
    match builder.build(&paths.root, &paths.template) {
        Ok(report) => {
            tracing::info!(
                "✓ Built {} pages ({} replaced)",
                report.generated.len(),
                report.deleted.len()
            );
            Ok(())
        }
        Err(BuildError::PagesFailed(failures)) => {
            for failure in &failures {
                tracing::error!("{}: {}", failure.folder.display(), failure.error);
            }
            bail!("{} page(s) failed to build", failures.len())
        }
        Err(err) => Err(err).context("Failed to build site"),
    }
}
