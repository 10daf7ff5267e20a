//! Markdown processing pipeline: line rewrites around a pulldown-cmark
//! conversion.

pub mod code_mask;
pub mod headings;
pub mod media;
pub mod toc;

#[cfg(test)]
mod test_integration;

use crate::frontmatter::{parse_frontmatter, Metadata};
use pulldown_cmark::{html, Options, Parser};

pub use code_mask::CodeBlockMask;
pub use headings::TocEntry;
pub use media::MediaKind;

/// Output of the markdown engine.
#[derive(Debug, Clone, Default)]
pub struct Converted {
    pub html: String,
    pub metadata: Metadata,
}

/// Markdown-to-HTML engine
///
/// Fenced code blocks and raw HTML passthrough are on by default in
/// pulldown-cmark; tables are enabled here. The metadata header is split
/// off before conversion.
pub struct MarkdownProcessor {
    options: Options,
}

impl MarkdownProcessor {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);

        Self { options }
    }

    pub fn convert(&self, markdown: &str) -> Converted {
        let (metadata, body) = parse_frontmatter(markdown);

        let parser = Parser::new_ext(&body, self.options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Converted {
            html: html_output,
            metadata,
        }
    }
}

impl Default for MarkdownProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Stages 1-3: heading links, media embeds, then the table of contents.
///
/// All three share one code mask computed from the source lines; the TOC
/// stage runs last because it changes the line count.
pub fn rewrite_source(lines: &[String]) -> (Vec<String>, Vec<TocEntry>) {
    let mask = CodeBlockMask::for_markdown(lines);
    let (linked, toc) = headings::link_headings(lines, &mask);
    let embedded = media::embed_media(&linked, &mask);
    let with_toc = toc::insert_toc(&embedded, &mask, &toc);
    tracing::debug!("Rewrote {} lines, {} headings", lines.len(), toc.len());
    (with_toc, toc)
}
