//! Anchor slug generation.

/// Convert a heading title to an anchor-safe slug
///
/// Rules:
/// - Lowercase
/// - Every character that is not alphabetic or numeric becomes a hyphen
/// - Collapse multiple hyphens
/// - Trim leading/trailing hyphens
///
/// Distinct titles may map to the same slug; callers do not deduplicate.
///
/// # Examples
///
/// ```
/// use palila_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Rust & Safety"), "rust-safety");
/// assert_eq!(slugify("C++ Programming"), "c-programming");
/// ```
pub fn slugify(input: &str) -> String {
    let lowercased = input.to_lowercase();

    let mut slug = String::with_capacity(lowercased.len());
    for c in lowercased.chars() {
        if c.is_alphabetic() || c.is_numeric() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }

    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Getting Started"), "getting-started");
    }

    #[test]
    fn test_punctuation_becomes_dashes() {
        assert_eq!(slugify("Node.js Tips"), "node-js-tips");
        assert_eq!(slugify("What's new?"), "what-s-new");
        assert_eq!(slugify("snake_case_name"), "snake-case-name");
    }

    #[test]
    fn test_unicode() {
        assert_eq!(slugify("Café"), "café");
        assert_eq!(slugify("Ünïcode Heading"), "ünïcode-heading");
    }

    #[test]
    fn test_multiple_spaces() {
        assert_eq!(slugify("Hello    World"), "hello-world");
        assert_eq!(slugify("a -- b"), "a-b");
    }

    #[test]
    fn test_leading_trailing_hyphens() {
        assert_eq!(slugify("  Hello World  "), "hello-world");
        assert_eq!(slugify("-Leading Hyphen"), "leading-hyphen");
        assert_eq!(slugify("(Parenthesized)"), "parenthesized");
    }

    #[test]
    fn test_empty_and_special_only() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("   "), "");
    }

    #[test]
    fn test_idempotent_over_own_output() {
        for title in ["Hello World", "C++ & Rust!", "  Version 2.0 (beta) ", "Café au lait"] {
            let once = slugify(title);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn test_collisions_are_kept() {
        assert_eq!(slugify("Setup!"), slugify("setup"));
    }
}
