//! # palila-core
//!
//! Core library for the palila static site generator.
//!
//! Every folder holding an `index.md` gets an `index.html` beside it: the
//! markdown is rewritten (heading anchors, media embeds, table of contents),
//! converted to HTML, and placed into a shared page template.

pub mod builder;
pub mod config;
pub mod frontmatter;
pub mod markdown;
pub mod page;
pub mod slug;
pub mod template;

pub use builder::{BuildError, BuildOptions, BuildReport, CleanReport, FailurePolicy, SiteBuilder};
pub use config::Config;
pub use frontmatter::Metadata;
pub use markdown::{MarkdownProcessor, TocEntry};
pub use page::{Document, PageError, PageTransformer, OUTPUT_FILE_NAME, SOURCE_FILE_NAME};
pub use slug::slugify;
pub use template::{Placeholder, Template};
