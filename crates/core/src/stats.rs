//! Corpus statistics and label frequency analysis

use crate::document::Document;
use crate::frequency::FrequencyTable;

/// Totals over a non-empty sequence of documents
#[derive(Debug, Clone, PartialEq)]
pub struct MentionSummary {
    pub tokens: usize,
    pub avg_tokens_per_doc: f64,
    pub entity_mentions: usize,
    pub event_mentions: usize,
    pub relation_mentions: usize,
    pub event_types: FrequencyTable,
    pub entity_types: FrequencyTable,
}

/// Statistics for one split.
///
/// An empty split only has `documents = 0`; `summary` is `None` in that case.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStatistics {
    pub documents: usize,
    pub summary: Option<MentionSummary>,
}

impl DatasetStatistics {
    pub fn compute(data: &[Document]) -> Self {
        if data.is_empty() {
            return Self {
                documents: 0,
                summary: None,
            };
        }

        let documents = data.len();
        let tokens: usize = data.iter().map(Document::token_count).sum();

        let summary = MentionSummary {
            tokens,
            avg_tokens_per_doc: tokens as f64 / documents as f64,
            entity_mentions: data.iter().map(|d| d.entity_mentions.len()).sum(),
            event_mentions: data.iter().map(|d| d.event_mentions.len()).sum(),
            relation_mentions: data.iter().map(|d| d.relation_mentions.len()).sum(),
            event_types: analyze_event_types(data),
            entity_types: analyze_entity_types(data),
        };

        Self {
            documents,
            summary: Some(summary),
        }
    }

    /// Average tokens per document, 0 for an empty split
    pub fn avg_tokens_per_doc(&self) -> f64 {
        self.summary
            .as_ref()
            .map(|s| s.avg_tokens_per_doc)
            .unwrap_or(0.0)
    }
}

/// Count event mentions per `event_type`; untyped events are skipped
pub fn analyze_event_types(data: &[Document]) -> FrequencyTable {
    data.iter()
        .flat_map(|doc| &doc.event_mentions)
        .filter_map(|event| event.event_type.as_deref())
        .collect()
}

/// Count entity mentions per `entity_type`; untyped entities are skipped
pub fn analyze_entity_types(data: &[Document]) -> FrequencyTable {
    data.iter()
        .flat_map(|doc| &doc.entity_mentions)
        .filter_map(|entity| entity.entity_type.as_deref())
        .collect()
}

/// Count argument roles, once per argument occurrence
pub fn analyze_argument_roles(data: &[Document]) -> FrequencyTable {
    data.iter()
        .flat_map(|doc| &doc.event_mentions)
        .flat_map(|event| &event.arguments)
        .filter_map(|arg| arg.role.as_deref())
        .collect()
}
