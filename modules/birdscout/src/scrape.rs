//! Extraction of (species, date) records from hotspot HTML.
//!
//! The site renders each sighting as a run of short text lines ending in a
//! Japanese observation-date marker:
//!
//! ```text
//! シジュウカラ
//! japtit1 / Parus minor
//! 2025年8月24日(日)に観察
//! ```
//!
//! So the parse is: flatten the document to trimmed text lines, find lines
//! equal to one of the window's date markers, and read the two preceding
//! lines as the common name and the `code / scientific` field.

use scraper::{Html, Node};

use birdscout_common::dates::DateWindow;

/// One sighting extracted from a hotspot page.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedRecord {
    pub observed_name: String,
    pub scientific: String,
    pub date_key: String,
}

/// Flatten a document to its visible text, one trimmed non-empty line per
/// entry. Script and style contents are skipped.
pub fn text_lines(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut lines = Vec::new();

    for node in document.tree.nodes() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let skipped = node.ancestors().any(|a| match a.value() {
            Node::Element(el) => matches!(el.name(), "script" | "style"),
            _ => false,
        });
        if skipped {
            continue;
        }
        let content: &str = &text.text;
        for line in content.split('\n') {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
    }

    lines
}

/// Scan a page for sightings dated inside the window.
///
/// Records whose middle line carries no `/`-delimited scientific name are
/// dropped; markers with fewer than two preceding lines are ignored.
pub fn extract_records(html: &str, window: &DateWindow) -> Vec<ScrapedRecord> {
    let lines = text_lines(html);
    let mut records = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let Some(date_key) = window.key_for_marker(line) else {
            continue;
        };
        if i < 2 {
            continue;
        }

        let observed_name = lines[i - 2].clone();
        let Some(scientific) = lines[i - 1].split('/').nth(1).map(str::trim) else {
            continue;
        };
        if scientific.is_empty() {
            continue;
        }

        records.push(ScrapedRecord {
            observed_name,
            scientific: scientific.to_string(),
            date_key: date_key.to_string(),
        });
    }

    records
}
