//! Plain-text rendering of documents, statistics and frequency tables

use std::fmt::Write;

use crate::document::Document;
use crate::frequency::FrequencyTable;
use crate::stats::DatasetStatistics;

const UNKNOWN: &str = "Unknown";

/// Render a document: identifiers, sentence, token count and, when
/// `show_mentions` is set, numbered mention listings.
///
/// Mention sections with no entries are left out.
pub fn render_document(doc: &Document, show_mentions: bool) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Document ID: {}", doc.doc_id.as_deref().unwrap_or(UNKNOWN));
    let _ = writeln!(out, "Sentence ID: {}", doc.sent_id.as_deref().unwrap_or(UNKNOWN));
    let _ = writeln!(out, "Sentence: {}", doc.sentence.as_deref().unwrap_or(""));
    let _ = writeln!(out, "Number of tokens: {}", doc.token_count());

    if show_mentions {
        push_section(&mut out, "Entity Mentions", &doc.entity_mentions);
        push_section(&mut out, "Event Mentions", &doc.event_mentions);
        push_section(&mut out, "Relation Mentions", &doc.relation_mentions);
    }

    out
}

fn push_section<T: std::fmt::Display>(out: &mut String, title: &str, items: &[T]) {
    if items.is_empty() {
        return;
    }

    let _ = writeln!(out, "\n{}:", title);
    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, item);
    }
}

/// Render a table by descending count, truncated to `top` entries if given
pub fn render_frequency_table(table: &FrequencyTable, top: Option<usize>) -> String {
    let mut out = String::new();
    for (label, count) in table.most_common(top) {
        let _ = writeln!(out, "  - {}: {} instances", label, count);
    }
    out
}

/// Render the scalar statistics of a split, one `- key: value` line each.
///
/// The type tables are rendered separately with [`render_frequency_table`].
pub fn render_statistics(stats: &DatasetStatistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  - documents: {}", stats.documents);

    if let Some(summary) = &stats.summary {
        let _ = writeln!(out, "  - tokens: {}", summary.tokens);
        let _ = writeln!(out, "  - avg_tokens_per_doc: {:.2}", summary.avg_tokens_per_doc);
        let _ = writeln!(out, "  - entity_mentions: {}", summary.entity_mentions);
        let _ = writeln!(out, "  - event_mentions: {}", summary.event_mentions);
        let _ = writeln!(out, "  - relation_mentions: {}", summary.relation_mentions);
    }

    out
}
