//! Integration tests for the full page pipeline

use super::*;
use crate::page::{Document, PageTransformer};
use crate::template::Template;

fn render(markdown: &str) -> String {
    let doc = Document::from_text("/site/page", markdown);
    PageTransformer::new().render(&doc, &Template::new("{{CONTENT}}"), 1)
}

fn lines(text: &str) -> Vec<String> {
    text.lines().map(String::from).collect()
}

#[test]
fn test_code_block_is_opaque() {
    let markdown = "# Real\n\n```\n![](TOC)\n# Not a heading\n![](pic.png)\n```\n";
    let html = render(markdown);

    assert!(
        html.contains("<pre><code>![](TOC)\n# Not a heading\n![](pic.png)\n</code></pre>"),
        "code block should be verbatim: {html}"
    );
    assert!(html.contains("<h1 id='real'><a href=\"#real\">Real</a></h1>"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("#not-a-heading"));
}

#[test]
fn test_toc_completeness_and_order() {
    let source = lines("![](TOC)\n\n# A\n\n## B\n\n# C\n");
    let (rewritten, toc) = rewrite_source(&source);

    assert_eq!(toc.len(), 3);
    assert_eq!(&rewritten[..3], &["* [A](#a)", "  * [B](#b)", "* [C](#c)"]);

    let html = render("![](TOC)\n\n# A\n\n## B\n\n# C\n");
    let a = html.find("<li><a href=\"#a\">A</a>").expect("toc item a");
    let b = html.find("<li><a href=\"#b\">B</a>").expect("toc item b");
    let c = html.find("<li><a href=\"#c\">C</a>").expect("toc item c");
    assert!(a < b && b < c);
    assert_eq!(html.matches("<ul>").count(), 2, "B nests one level deeper");
    assert!(html.contains("<h2 id='b'><a href=\"#b\">B</a></h2>"));
}

#[test]
fn test_toc_without_top_level_headings_is_a_list() {
    let html = render("![](TOC)\n\n## Only Sub\n\n### Deeper\n\n## Two\n");

    assert!(!html.contains("<pre>"), "toc must not become a code block: {html}");
    assert!(html.contains("<li><a href=\"#only-sub\">Only Sub</a>"));
    assert!(html.contains("<li><a href=\"#deeper\">Deeper</a></li>"));
    assert!(html.contains("<li><a href=\"#two\">Two</a></li>"));
    assert_eq!(html.matches("<ul>").count(), 2);
}

#[test]
fn test_media_classification_end_to_end() {
    let html = render("![](pic.PNG)\n\n![](https://youtu.be/XYZ)\n");
    assert!(html.contains("<a href='pic.PNG'><img src='pic.PNG'></a>"));
    assert!(html.contains("data='https://www.youtube.com/embed/XYZ'"));

    let source = lines("![](https://example.com/page)");
    let (rewritten, _) = rewrite_source(&source);
    assert_eq!(rewritten, source);
}

#[test]
fn test_unterminated_fence_masks_rest() {
    let source = lines("# Top\n```\ncode\n# Stuck\n![](TOC)");
    let (rewritten, toc) = rewrite_source(&source);
    assert_eq!(toc.len(), 1);
    assert_eq!(rewritten[3], "# Stuck");
    assert_eq!(rewritten[4], "![](TOC)");
}

#[test]
fn test_rewrite_is_stable_on_processed_headings() {
    let source = lines("# Intro\n\n## Details");
    let (once, _) = rewrite_source(&source);
    let (twice, toc) = rewrite_source(&once);
    assert_eq!(once, twice);
    assert!(toc.is_empty());
}

#[test]
fn test_metadata_header_survives_rewrite() {
    let doc = Document::from_text("/site/blog", "title: Post\n\n# Heading\n");
    let html = PageTransformer::new().render(
        &doc,
        &Template::new("{{HEAD_TITLE}}\n{{CONTENT}}"),
        1,
    );
    assert!(html.starts_with("Post\n"));
    assert!(!html.contains("title: Post"));
    assert!(html.contains("<h1 id='heading'>"));
}
