//! HTML-to-plain-text conversion for scraped pages.
//!
//! The scrape target pads its statistics tables with scripts, tracking
//! pixels and navigation links. Summarization only wants the visible
//! text, so everything else is dropped here before the corpus is built.

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Subtrees removed wholesale: script/style payloads and images
/// (including their alt text).
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "img"];

/// Reduce raw markup to a single whitespace-normalized text block.
///
/// Anchors are replaced by their visible text; hrefs never appear in the
/// output. Pure and deterministic: identical markup in, identical text out.
#[must_use]
pub fn html_to_plain_text(raw: &str) -> String {
    let document = Html::parse_document(raw);
    let mut text = String::new();
    collect_text(*document.root_element(), &mut text);
    collapse_whitespace(&text)
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                if SKIPPED_ELEMENTS.contains(&element.name()) {
                    continue;
                }
                // Descending through <a> keeps the link text and loses the href.
                collect_text(child, out);
            }
            _ => {}
        }
    }
}

/// Trim each line, split on runs of two-or-more spaces, drop empty
/// phrases, rejoin with single spaces.
fn collapse_whitespace(text: &str) -> String {
    let mut phrases: Vec<&str> = Vec::new();
    for line in text.lines() {
        for phrase in line.trim().split("  ") {
            let phrase = phrase.trim();
            if !phrase.is_empty() {
                phrases.push(phrase);
            }
        }
    }
    phrases.join(" ")
}
