//! Site building logic - walks the tree and regenerates every page.

use crate::page::{PageError, PageTransformer, OUTPUT_FILE_NAME, SOURCE_FILE_NAME};
use crate::template::Template;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error("{} page(s) failed to build", .0.len())]
    PagesFailed(Vec<PageFailure>),
}

/// A folder that could not be generated.
#[derive(Debug)]
pub struct PageFailure {
    pub folder: PathBuf,
    pub error: PageError,
}

/// What to do when one folder fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the whole build at the first failure.
    #[default]
    Abort,
    /// Keep going and report every failure at the end.
    Continue,
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    pub failure_policy: FailurePolicy,
}

/// Files touched by a build.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub generated: Vec<PathBuf>,
    pub deleted: Vec<PathBuf>,
}

/// Files removed by a clean.
#[derive(Debug, Clone, Default)]
pub struct CleanReport {
    pub deleted: Vec<PathBuf>,
}

/// Main site builder
pub struct SiteBuilder {
    options: BuildOptions,
    transformer: PageTransformer,
}

impl SiteBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self::with_transformer(options, PageTransformer::new())
    }

    pub fn with_transformer(options: BuildOptions, transformer: PageTransformer) -> Self {
        Self {
            options,
            transformer,
        }
    }

    /// Regenerate `index.html` in every folder under `root` that has an
    /// `index.md`.
    ///
    /// Folders are generated as the walk reaches them. A directory that
    /// cannot be read is handled by the failure policy like any other
    /// failing folder.
    pub fn build(&self, root: &Path, template_path: &Path) -> Result<BuildReport, BuildError> {
        let template = Template::from_file(template_path)?;
        tracing::info!("Walking {}", root.display());

        let mut report = BuildReport::default();
        let mut failures = Vec::new();

        for next in walk_folders(root)? {
            let (folder, error) = match next {
                Ok(folder) => match self.generate(&folder, &template, root, &mut report) {
                    Ok(()) => continue,
                    Err(error) => (folder, error),
                },
                Err(err) => match self.options.failure_policy {
                    FailurePolicy::Abort => return Err(err.into()),
                    FailurePolicy::Continue => walk_failure(root, err),
                },
            };

            match self.options.failure_policy {
                FailurePolicy::Abort => return Err(error.into()),
                FailurePolicy::Continue => {
                    tracing::warn!("Failed to generate {}: {}", folder.display(), error);
                    failures.push(PageFailure { folder, error });
                }
            }
        }

        tracing::info!("Generated {} pages", report.generated.len());

        if failures.is_empty() {
            Ok(report)
        } else {
            Err(BuildError::PagesFailed(failures))
        }
    }

    /// Regenerate a single folder, leaving its subfolders alone.
    pub fn build_folder(
        &self,
        folder: &Path,
        template_path: &Path,
        site_root: &Path,
    ) -> Result<BuildReport, BuildError> {
        let template = Template::from_file(template_path)?;
        let source = folder.join(SOURCE_FILE_NAME);
        if !source.is_file() {
            return Err(PageError::NotFound(source).into());
        }

        let mut report = BuildReport::default();
        self.generate(folder, &template, site_root, &mut report)?;
        Ok(report)
    }

    /// Delete every generated `index.html` under `root`. Sources are kept.
    ///
    /// Unreadable directories follow the failure policy, as in [`build`].
    ///
    /// [`build`]: SiteBuilder::build
    pub fn clean(&self, root: &Path) -> Result<CleanReport, BuildError> {
        let mut report = CleanReport::default();
        let mut failures = Vec::new();

        for next in walk_folders(root)? {
            let folder = match next {
                Ok(folder) => folder,
                Err(err) => match self.options.failure_policy {
                    FailurePolicy::Abort => return Err(err.into()),
                    FailurePolicy::Continue => {
                        let (folder, error) = walk_failure(root, err);
                        tracing::warn!("Skipping {}: {}", folder.display(), error);
                        failures.push(PageFailure { folder, error });
                        continue;
                    }
                },
            };

            let output = folder.join(OUTPUT_FILE_NAME);
            if output.is_file() {
                tracing::info!("deleting\t{}", output.display());
                fs::remove_file(&output)?;
                report.deleted.push(output);
            }
        }

        tracing::info!("Deleted {} pages", report.deleted.len());

        if failures.is_empty() {
            Ok(report)
        } else {
            Err(BuildError::PagesFailed(failures))
        }
    }

    /// Delete-then-regenerate one folder. Folders without `index.md` are
    /// skipped.
    fn generate(
        &self,
        folder: &Path,
        template: &Template,
        site_root: &Path,
        report: &mut BuildReport,
    ) -> Result<(), PageError> {
        let source = folder.join(SOURCE_FILE_NAME);
        if !source.exists() {
            return Ok(());
        }

        let output = folder.join(OUTPUT_FILE_NAME);
        if output.exists() {
            tracing::info!("deleting\t{}", output.display());
            fs::remove_file(&output)?;
            report.deleted.push(output.clone());
        }

        tracing::info!("generating\t{}", output.display());
        let html = self.transformer.render_file(&source, template, site_root)?;
        fs::write(&output, html)?;

        report.generated.push(output);
        Ok(())
    }
}

impl Default for SiteBuilder {
    fn default() -> Self {
        Self::new(BuildOptions::default())
    }
}

/// `root` and every directory below it, each exactly once, sorted by name
/// within each level. Directories are yielded lazily; an entry the walk
/// cannot read comes through as an error without ending the iteration.
fn walk_folders(
    root: &Path,
) -> Result<impl Iterator<Item = Result<PathBuf, walkdir::Error>>, BuildError> {
    if !root.is_dir() {
        return Err(PageError::NotFound(root.to_path_buf()).into());
    }

    let walk = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(err) => Some(Err(err)),
        });
    Ok(walk)
}

/// Turn a walk error into a per-folder failure, blaming the path the walk
/// could not read.
fn walk_failure(root: &Path, err: walkdir::Error) -> (PathBuf, PageError) {
    let folder = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    (folder, PageError::Io(err.into()))
}
