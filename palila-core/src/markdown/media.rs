//! Single-line media embeds: `![](URL)` on a line of its own becomes a
//! clickable image or an embedded YouTube player.

use super::code_mask::CodeBlockMask;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "gif"];
const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// What a standalone `![](URL)` line refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    YouTube,
}

/// URL of a line consisting solely of `![](URL)`, ignoring surrounding
/// whitespace.
pub fn media_url(line: &str) -> Option<&str> {
    line.trim().strip_prefix("![](")?.strip_suffix(')')
}

/// Classify a media URL. Extension matching is case-insensitive.
pub fn classify(url: &str) -> Option<MediaKind> {
    let lowered = url.to_lowercase();
    let extension = lowered.rsplit('.').next().unwrap_or_default();
    if IMAGE_EXTENSIONS.contains(&extension) {
        Some(MediaKind::Image)
    } else if lowered.contains("://youtu") {
        Some(MediaKind::YouTube)
    } else {
        None
    }
}

/// Final path component of a URL (`https://youtu.be/XYZ` -> `XYZ`).
fn basename(url: &str) -> &str {
    url.trim_end_matches('/').rsplit('/').next().unwrap_or(url)
}

fn image_html(url: &str) -> String {
    format!("<a href='{url}'><img src='{url}'></a>")
}

fn youtube_html(url: &str) -> String {
    let embed = format!("{}{}", YOUTUBE_EMBED_BASE, basename(url));
    format!(
        "<div class='ratio ratio-16x9 my-5 youTubeVideo'>\
         <object class='border border-dark shadow' data='{embed}'></object></div>"
    )
}

/// Replace media lines outside code with their HTML embed. Lines with any
/// other URL are kept as written.
pub fn embed_media(lines: &[String], mask: &CodeBlockMask) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if mask.is_code(i) {
                return line.clone();
            }
            let Some(url) = media_url(line) else {
                return line.clone();
            };
            match classify(url) {
                Some(MediaKind::Image) => image_html(url),
                Some(MediaKind::YouTube) => youtube_html(url),
                None => line.clone(),
            }
        })
        .collect()
}
