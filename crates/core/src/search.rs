//! Linear-scan document filters
//!
//! Every filter keeps input order and returns a document at most once,
//! however many of its mentions match.

use crate::document::Document;

/// Up to `limit` documents that have at least one event mention
pub fn find_examples_with_events(data: &[Document], limit: usize) -> Vec<&Document> {
    data.iter().filter(|doc| doc.has_events()).take(limit).collect()
}

/// Every document with an event mention of `event_type`
pub fn search_by_event_type<'a>(data: &'a [Document], event_type: &str) -> Vec<&'a Document> {
    data.iter()
        .filter(|doc| doc.has_event_type(event_type))
        .collect()
}

/// Up to `limit` documents with an entity mention of `entity_type`.
///
/// The limit is checked after each document has been scanned, so a
/// `limit` of 0 still examines the first document.
pub fn search_by_entity_type<'a>(
    data: &'a [Document],
    entity_type: &str,
    limit: usize,
) -> Vec<&'a Document> {
    let mut results = Vec::new();
    for doc in data {
        if doc.has_entity_type(entity_type) {
            results.push(doc);
        }
        if results.len() >= limit {
            break;
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Document> {
        [
            r#"{"doc_id":"1","event_mentions":[{"event_type":"Attack"},{"event_type":"Attack"}],"entity_mentions":[{"entity_type":"GPE"},{"entity_type":"GPE"}]}"#,
            r#"{"doc_id":"2","event_mentions":[]}"#,
            r#"{"doc_id":"3","event_mentions":[{"event_type":"Die"}],"entity_mentions":[{"entity_type":"PER"}]}"#,
            r#"{"doc_id":"4","event_mentions":[{"event_type":"Attack"}],"entity_mentions":[{"entity_type":"GPE"}]}"#,
        ]
        .iter()
        .map(|line| Document::from_json(line).unwrap())
        .collect()
    }

    fn ids(docs: &[&Document]) -> Vec<String> {
        docs.iter().filter_map(|d| d.doc_id.clone()).collect()
    }

    #[test]
    fn test_find_examples_with_events() {
        let data = corpus();

        assert_eq!(ids(&find_examples_with_events(&data, 1)), vec!["1"]);
        assert_eq!(ids(&find_examples_with_events(&data, 3)), vec!["1", "3", "4"]);
        assert_eq!(ids(&find_examples_with_events(&data, 10)), vec!["1", "3", "4"]);
        assert!(find_examples_with_events(&data, 0).is_empty());
    }

    #[test]
    fn test_search_by_event_type_returns_each_document_once() {
        let data = corpus();

        assert_eq!(ids(&search_by_event_type(&data, "Attack")), vec!["1", "4"]);
        assert_eq!(ids(&search_by_event_type(&data, "Die")), vec!["3"]);
        assert!(search_by_event_type(&data, "Marry").is_empty());
    }

    #[test]
    fn test_search_by_entity_type_respects_limit() {
        let data = corpus();

        assert_eq!(ids(&search_by_entity_type(&data, "GPE", 1)), vec!["1"]);
        assert_eq!(ids(&search_by_entity_type(&data, "GPE", 5)), vec!["1", "4"]);
        assert_eq!(ids(&search_by_entity_type(&data, "PER", 5)), vec!["3"]);
        assert!(search_by_entity_type(&data, "ORG", 5).is_empty());
    }

    #[test]
    fn test_search_by_entity_type_zero_limit_checks_first_document_only() {
        let data = corpus();

        assert_eq!(ids(&search_by_entity_type(&data, "GPE", 0)), vec!["1"]);
        assert!(search_by_entity_type(&data, "PER", 0).is_empty());
    }

    #[test]
    fn test_empty_corpus() {
        assert!(find_examples_with_events(&[], 3).is_empty());
        assert!(search_by_event_type(&[], "Attack").is_empty());
        assert!(search_by_entity_type(&[], "GPE", 1).is_empty());
    }
}
