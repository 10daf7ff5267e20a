//! Page template and placeholder substitution.
//!
//! Templates are plain text with `{{NAME}}` tokens replaced by literal
//! substring substitution. There is no template grammar: unknown tokens are
//! left as written and missing tokens are simply not substituted.

use crate::page::PageError;
use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::Arc;

/// Known placeholder tokens, in substitution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    HeadTitle,
    HeadDescription,
    AdsWrapStart,
    AdsWrapEnd,
    BaseUrl,
    BuildUtcDate,
    BuildUtcTime,
    BuildTimeMs,
    Content,
}

impl Placeholder {
    pub const ALL: [Placeholder; 9] = [
        Placeholder::HeadTitle,
        Placeholder::HeadDescription,
        Placeholder::AdsWrapStart,
        Placeholder::AdsWrapEnd,
        Placeholder::BaseUrl,
        Placeholder::BuildUtcDate,
        Placeholder::BuildUtcTime,
        Placeholder::BuildTimeMs,
        Placeholder::Content,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Placeholder::HeadTitle => "{{HEAD_TITLE}}",
            Placeholder::HeadDescription => "{{HEAD_DESCRIPTION}}",
            Placeholder::AdsWrapStart => "{{ADS_WRAP_START}}",
            Placeholder::AdsWrapEnd => "{{ADS_WRAP_END}}",
            Placeholder::BaseUrl => "{{BASE_URL}}",
            Placeholder::BuildUtcDate => "{{BUILD_UTC_DATE}}",
            Placeholder::BuildUtcTime => "{{BUILD_UTC_TIME}}",
            Placeholder::BuildTimeMs => "{{BUILD_TIME_MS}}",
            Placeholder::Content => "{{CONTENT}}",
        }
    }
}

/// Ordered (placeholder, value) pairs applied to a template.
pub type Replacements = Vec<(Placeholder, String)>;

/// Shared, read-only page template text.
#[derive(Debug, Clone)]
pub struct Template {
    text: Arc<str>,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Arc::from(text.into()),
        }
    }

    /// Load a template file once for a whole build run.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PageError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PageError::NotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        Ok(Self::new(text))
    }

    /// Replace every occurrence of each token, in table order.
    pub fn substitute(&self, replacements: &[(Placeholder, String)]) -> String {
        let mut html = self.text.to_string();
        for (placeholder, value) in replacements {
            html = html.replace(placeholder.token(), value);
        }
        html
    }
}

/// Source of the build timestamp.
pub trait BuildClock {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl BuildClock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl BuildClock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Relative link to the site root from a folder `depth` levels below it.
///
/// ```
/// use palila_core::template::base_url;
///
/// assert_eq!(base_url(0), ".");
/// assert_eq!(base_url(2), "./../..");
/// ```
pub fn base_url(depth: usize) -> String {
    let url = format!("./{}", "../".repeat(depth));
    url.trim_end_matches('/').to_string()
}

/// Locale-independent short date (`10/19/26`).
pub fn format_date(now: &DateTime<Utc>) -> String {
    now.format("%m/%d/%y").to_string()
}

/// Locale-independent time of day (`14:03:05`).
pub fn format_time(now: &DateTime<Utc>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Per-page values resolved into placeholder replacements.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub title: String,
    pub description: String,
    pub hide_ads: bool,
    pub depth: usize,
    pub built_at: DateTime<Utc>,
    pub elapsed_ms: f64,
    pub content: String,
}

impl PageContext {
    pub fn replacements(&self) -> Replacements {
        let (ads_start, ads_end) = if self.hide_ads {
            ("<!--", "-->")
        } else {
            ("", "")
        };

        Placeholder::ALL
            .iter()
            .map(|&placeholder| {
                let value = match placeholder {
                    Placeholder::HeadTitle => self.title.clone(),
                    Placeholder::HeadDescription => self.description.clone(),
                    Placeholder::AdsWrapStart => ads_start.to_string(),
                    Placeholder::AdsWrapEnd => ads_end.to_string(),
                    Placeholder::BaseUrl => base_url(self.depth),
                    Placeholder::BuildUtcDate => format_date(&self.built_at),
                    Placeholder::BuildUtcTime => format_time(&self.built_at),
                    Placeholder::BuildTimeMs => format!("{:.1}", self.elapsed_ms),
                    Placeholder::Content => self.content.clone(),
                };
                (placeholder, value)
            })
            .collect()
    }
}
