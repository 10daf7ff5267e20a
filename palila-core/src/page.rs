//! Single-page transformation: one `index.md` plus the template becomes the
//! final HTML text.

use crate::markdown::{headings, rewrite_source, MarkdownProcessor};
use crate::template::{BuildClock, PageContext, SystemClock, Template};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

/// Name every source document must have.
pub const SOURCE_FILE_NAME: &str = "index.md";

/// Name of the generated page, written next to its source.
pub const OUTPUT_FILE_NAME: &str = "index.html";

#[derive(Error, Debug)]
pub enum PageError {
    #[error("does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("markdown files must be named index.md: {}", .0.display())]
    InvalidDocumentName(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One markdown source as lines, with the folder that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub folder: PathBuf,
    pub lines: Vec<String>,
}

impl Document {
    pub fn from_text(folder: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            folder: folder.into(),
            lines: text.lines().map(String::from).collect(),
        }
    }

    /// Read `path`, which must exist and be named `index.md`.
    pub fn load(path: &Path) -> Result<Self, PageError> {
        if !path.is_file() {
            return Err(PageError::NotFound(path.to_path_buf()));
        }
        if path.file_name().and_then(|n| n.to_str()) != Some(SOURCE_FILE_NAME) {
            return Err(PageError::InvalidDocumentName(path.to_path_buf()));
        }

        let text = std::fs::read_to_string(path)?;
        let folder = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::from_text(folder, &text))
    }

    /// Folder name, used as the fallback page title.
    pub fn folder_name(&self) -> String {
        self.folder
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Number of directory levels between `site_root` and `folder`.
pub fn depth_below(site_root: &Path, folder: &Path) -> usize {
    match folder.strip_prefix(site_root) {
        Ok(rel) => rel.components().count(),
        Err(_) => {
            tracing::warn!(
                "{} is outside site root {}; using depth 0",
                folder.display(),
                site_root.display()
            );
            0
        }
    }
}

/// Turns documents into finished pages
pub struct PageTransformer {
    processor: MarkdownProcessor,
    clock: Arc<dyn BuildClock + Send + Sync>,
}

impl PageTransformer {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn BuildClock + Send + Sync>) -> Self {
        Self {
            processor: MarkdownProcessor::new(),
            clock,
        }
    }

    /// Render a document into the template.
    ///
    /// `depth` is how many folders the document sits below the site root.
    pub fn render(&self, document: &Document, template: &Template, depth: usize) -> String {
        let started = Instant::now();

        let (source_lines, toc) = rewrite_source(&document.lines);
        let converted = self.processor.convert(&source_lines.join("\n"));

        let html_lines: Vec<String> = converted.html.split('\n').map(String::from).collect();
        let content = headings::inject_heading_ids(&html_lines).join("\n");

        let metadata = &converted.metadata;
        let title = metadata
            .first("title")
            .map(String::from)
            .unwrap_or_else(|| document.folder_name());
        let description = metadata.first("description").unwrap_or_default().to_string();
        let hide_ads = metadata
            .first("noads")
            .is_some_and(|value| !value.eq_ignore_ascii_case("false"));

        tracing::debug!(
            "Rendered {} ({} headings, depth {})",
            document.folder.display(),
            toc.len(),
            depth
        );

        let context = PageContext {
            title,
            description,
            hide_ads,
            depth,
            built_at: self.clock.now_utc(),
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
            content,
        };
        template.substitute(&context.replacements())
    }

    /// Load and render one `index.md` file. Performs no writes.
    pub fn render_file(
        &self,
        markdown_path: &Path,
        template: &Template,
        site_root: &Path,
    ) -> Result<String, PageError> {
        let document = Document::load(markdown_path)?;
        let depth = depth_below(site_root, &document.folder);
        Ok(self.render(&document, template, depth))
    }

    /// Render `folder/index.md` with the template at `template_path`.
    pub fn render_folder(
        &self,
        folder: &Path,
        template_path: &Path,
        site_root: &Path,
    ) -> Result<String, PageError> {
        let template = Template::from_file(template_path)?;
        self.render_file(&folder.join(SOURCE_FILE_NAME), &template, site_root)
    }
}

impl Default for PageTransformer {
    fn default() -> Self {
        Self::new()
    }
}
