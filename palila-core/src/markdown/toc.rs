//! Table of contents generation for the `![](TOC)` marker.

use super::code_mask::CodeBlockMask;
use super::headings::TocEntry;

pub const TOC_MARKER: &str = "![](TOC)";

/// Nested markdown bullet list, two spaces of indent per heading level.
///
/// Levels count from the shallowest heading in `entries`, and an item is
/// never nested more than one level below the item before it. Four or more
/// leading spaces on a list's first line would otherwise read as an
/// indented code block.
pub fn render_toc_markdown(entries: &[TocEntry]) -> Vec<String> {
    let Some(min_depth) = entries.iter().map(|entry| entry.depth).min() else {
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(entries.len());
    let mut previous: Option<usize> = None;
    for entry in entries {
        let relative = entry.depth - min_depth;
        let level = match previous {
            Some(prev) => relative.min(prev + 1),
            None => 0,
        };
        previous = Some(level);
        lines.push(format!(
            "{}* [{}](#{})",
            "  ".repeat(level),
            entry.title,
            entry.slug()
        ));
    }
    lines
}

/// Replace every marker line outside code with the table of contents.
///
/// The list is followed by a blank line so it cannot swallow the next
/// paragraph.
pub fn insert_toc(lines: &[String], mask: &CodeBlockMask, entries: &[TocEntry]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + entries.len());
    for (i, line) in lines.iter().enumerate() {
        if !mask.is_code(i) && line == TOC_MARKER {
            out.extend(render_toc_markdown(entries));
            out.push(String::new());
        } else {
            out.push(line.clone());
        }
    }
    out
}
