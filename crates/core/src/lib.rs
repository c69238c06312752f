//! Core types for the BKEE corpus explorer
//!
//! This crate holds everything the explorer does with a corpus: the
//! annotated-sentence data model, the JSON Lines loader, the frequency
//! tables and statistics, the document filters, and the text rendering
//! used by the CLI.

pub mod document;
pub mod error;
pub mod frequency;
pub mod loader;
pub mod report;
pub mod search;
pub mod stats;

pub use document::{Argument, Document, EntityMention, EventMention};
pub use error::{CoreError, Result};
pub use frequency::FrequencyTable;
pub use loader::{load_jsonl, Split};
pub use report::{render_document, render_frequency_table, render_statistics};
pub use search::{find_examples_with_events, search_by_entity_type, search_by_event_type};
pub use stats::{
    analyze_argument_roles, analyze_entity_types, analyze_event_types, DatasetStatistics,
    MentionSummary,
};
