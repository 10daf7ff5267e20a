//! Metadata header parsing from markdown files.
//!
//! Pages declare metadata as `key: value` lines at the very top of the
//! document, optionally fenced by `---`. The header ends at the first blank
//! line, at a `---`/`...` terminator, or at the first line that is not a
//! metadata line.

use regex::Regex;
use std::sync::OnceLock;

static META_REGEX: OnceLock<Regex> = OnceLock::new();
static META_MORE_REGEX: OnceLock<Regex> = OnceLock::new();
static BEGIN_REGEX: OnceLock<Regex> = OnceLock::new();
static END_REGEX: OnceLock<Regex> = OnceLock::new();

fn meta_regex() -> &'static Regex {
    META_REGEX.get_or_init(|| {
        Regex::new(r"^ {0,3}(?P<key>[A-Za-z0-9_-]+):\s*(?P<value>.*)").unwrap()
    })
}

fn meta_more_regex() -> &'static Regex {
    META_MORE_REGEX.get_or_init(|| Regex::new(r"^ {4,}(?P<value>.*)").unwrap())
}

fn begin_regex() -> &'static Regex {
    BEGIN_REGEX.get_or_init(|| Regex::new(r"^-{3}(\s.*)?$").unwrap())
}

fn end_regex() -> &'static Regex {
    END_REGEX.get_or_init(|| Regex::new(r"^(-{3}|\.{3})(\s.*)?$").unwrap())
}

/// Page metadata: lower-cased keys mapped to their value sequences,
/// in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    entries: Vec<(String, Vec<String>)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to `key` (stored lower-cased).
    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        let key = key.to_lowercase();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value.into()),
            None => self.entries.push((key, vec![value.into()])),
        }
    }

    /// All values declared for `key`, matched case-insensitively.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        let key = key.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// First value declared for `key`, matched case-insensitively.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a markdown document into its metadata header and body.
///
/// If no header is present, returns empty metadata with the full content
/// as body.
///
/// # Example
///
/// ```
/// use palila_core::frontmatter::parse_frontmatter;
///
/// let content = "Title: My Page\nDescription: notes\n\n# Hello\n";
///
/// let (meta, body) = parse_frontmatter(content);
/// assert_eq!(meta.first("title"), Some("My Page"));
/// assert_eq!(meta.first("DESCRIPTION"), Some("notes"));
/// assert_eq!(body, "# Hello\n");
/// ```
pub fn parse_frontmatter(content: &str) -> (Metadata, String) {
    let mut meta = Metadata::new();
    let mut lines = content.split_inclusive('\n').peekable();
    let mut consumed = 0;

    if let Some(&first) = lines.peek() {
        if begin_regex().is_match(first.trim_end_matches(['\r', '\n'])) {
            consumed += first.len();
            lines.next();
        }
    }

    let mut current_key: Option<String> = None;
    for raw in lines {
        let line = raw.trim_end_matches(['\r', '\n']);

        if line.trim().is_empty() || end_regex().is_match(line) {
            consumed += raw.len();
            break;
        }

        if let Some(caps) = meta_regex().captures(line) {
            let key = caps["key"].to_lowercase();
            meta.push(&key, caps["value"].trim());
            current_key = Some(key);
        } else if let (Some(caps), Some(key)) = (meta_more_regex().captures(line), &current_key) {
            meta.push(key, caps["value"].trim());
        } else {
            break;
        }

        consumed += raw.len();
    }

    (meta, content[consumed..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_header() {
        let content = "title: Test Page\ndescription: A test page\n\n# Hello World\n\nThis is the content.";

        let (meta, body) = parse_frontmatter(content);
        assert_eq!(meta.first("title"), Some("Test Page"));
        assert_eq!(meta.first("description"), Some("A test page"));
        assert_eq!(body, "# Hello World\n\nThis is the content.");
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let (meta, _) = parse_frontmatter("Title: Upper\nNoAds: yes\n\nBody");
        assert_eq!(meta.first("title"), Some("Upper"));
        assert_eq!(meta.first("TITLE"), Some("Upper"));
        assert_eq!(meta.first("noads"), Some("yes"));
    }

    #[test]
    fn test_dashed_header() {
        let content = "---\ntitle: Fenced\n---\n# Heading\n";
        let (meta, body) = parse_frontmatter(content);
        assert_eq!(meta.first("title"), Some("Fenced"));
        assert_eq!(body, "# Heading\n");
    }

    #[test]
    fn test_continuation_lines() {
        let content = "authors: Ada\n    Grace\ntitle: Two\n\nBody";
        let (meta, body) = parse_frontmatter(content);
        assert_eq!(
            meta.get("authors"),
            Some(&["Ada".to_string(), "Grace".to_string()][..])
        );
        assert_eq!(meta.first("title"), Some("Two"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_no_header() {
        let content = "# Just Content\n\nNo metadata here.";
        let (meta, body) = parse_frontmatter(content);
        assert!(meta.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_non_metadata_line_stops_header() {
        let content = "title: Partial\nThis is prose.\n";
        let (meta, body) = parse_frontmatter(content);
        assert_eq!(meta.first("title"), Some("Partial"));
        assert_eq!(body, "This is prose.\n");
    }

    #[test]
    fn test_empty_value() {
        let (meta, _) = parse_frontmatter("noads:\n\ntext");
        assert_eq!(meta.first("noads"), Some(""));
    }

    #[test]
    fn test_repeated_keys_accumulate() {
        let (meta, _) = parse_frontmatter("tag: a\ntag: b\n\n");
        assert_eq!(meta.get("tag").map(|v| v.len()), Some(2));
        assert_eq!(meta.first("tag"), Some("a"));
    }
}
