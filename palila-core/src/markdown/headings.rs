//! Heading passes: self-linking markdown headings and HTML heading ids.

use super::code_mask::CodeBlockMask;
use crate::slug::slugify;

/// A heading recorded for the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    /// Number of leading `#` characters.
    pub depth: usize,
    pub title: String,
}

impl TocEntry {
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

/// Split `## Title` into (`##`, `Title`).
///
/// Returns `None` when the line does not start with a `#` run followed by a
/// space.
pub fn split_heading(line: &str) -> Option<(&str, &str)> {
    let depth = line.bytes().take_while(|&b| b == b'#').count();
    if depth == 0 {
        return None;
    }
    let (hashes, rest) = line.split_at(depth);
    let title = rest.strip_prefix(' ')?;
    Some((hashes, title))
}

/// Rewrite each markdown heading outside code into a link to its own
/// anchor, recording every rewritten heading in document order.
///
/// Lines already containing `# [` are treated as processed and skipped.
pub fn link_headings(lines: &[String], mask: &CodeBlockMask) -> (Vec<String>, Vec<TocEntry>) {
    let mut toc = Vec::new();
    let linked = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if mask.is_code(i) || line.contains("# [") {
                return line.clone();
            }
            match split_heading(line) {
                Some((hashes, title)) => {
                    toc.push(TocEntry {
                        depth: hashes.len(),
                        title: title.to_string(),
                    });
                    format!("{} [{}](#{})", hashes, title, slugify(title))
                }
                None => {
                    if line.starts_with('#') {
                        tracing::debug!("Skipping malformed heading: {}", line);
                    }
                    line.clone()
                }
            }
        })
        .collect();
    (linked, toc)
}

/// Give every linked HTML heading outside `<pre>` an `id` matching its
/// link target.
///
/// The id comes from the first double-quoted value on the line with its
/// leading `#` removed, and is inserted at the first `>` of the line.
pub fn inject_heading_ids(lines: &[String]) -> Vec<String> {
    let mask = CodeBlockMask::for_html(lines);
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if mask.is_code(i) || !is_linked_heading(line) {
                return line.clone();
            }
            match line.split('"').nth(1) {
                Some(target) => {
                    let anchor = target.strip_prefix('#').unwrap_or(target);
                    line.replacen('>', &format!(" id='{}'>", anchor), 1)
                }
                None => line.clone(),
            }
        })
        .collect()
}

fn is_linked_heading(line: &str) -> bool {
    let mut chars = line.chars();
    line.starts_with("<h")
        && chars.nth(2).is_some_and(|c| c.is_ascii_digit())
        && line.contains("href")
}
