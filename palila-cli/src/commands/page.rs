//! Single-folder page command.

use anyhow::{Context, Result};
use palila_core::config::{existing_dir, existing_file};
use palila_core::{Config, SiteBuilder};
use std::path::Path;

/// Regenerate `index.html` in one folder
pub fn build_page(folder: &Path, config: &Config) -> Result<()> {
    let folder = existing_dir(folder)?;
    let template = config
        .template_file()
        .context("No page template given (use --template)")?;
    let template = existing_file(&template)?;
    let root = match config.root_dir() {
        Some(root) => existing_dir(&root)?,
        None => folder.clone(),
    };

    let builder = SiteBuilder::new(config.build_options());
    let report = builder
        .build_folder(&folder, &template, &root)
        .with_context(|| format!("Failed to build {}", folder.display()))?;

    for page in &report.generated {
        tracing::info!("✓ Wrote {}", page.display());
    }
    Ok(())
}
