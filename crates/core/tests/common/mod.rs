//! Common test utilities

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `lines` as a JSON Lines file named `name` inside a fresh temp dir
pub fn write_corpus(name: &str, lines: &[&str]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content).expect("Failed to write corpus");
    (dir, path)
}

/// A small corpus shaped like the processed BKEE splits
pub const SAMPLE: &[&str] = &[
    r#"{"doc_id":"1","sent_id":"1-0","sentence":"a b","tokens":["a","b"],"entity_mentions":[{"id":"e1","entity_type":"GPE"}],"event_mentions":[{"event_type":"Attack","arguments":[{"role":"Agent"},{"role":"Place"}]}],"relation_mentions":[]}"#,
    r#"{"doc_id":"2","sent_id":"2-0","sentence":"c","tokens":["c"],"entity_mentions":[],"event_mentions":[],"relation_mentions":[]}"#,
    r#"{"doc_id":"3","sent_id":"3-0","sentence":"d e f","tokens":["d","e","f"],"entity_mentions":[{"entity_type":"PER"},{"entity_type":"GPE"},{"text":"untyped"}],"event_mentions":[{"event_type":"Die","arguments":[{"role":"Victim"},{"role":"Agent"}]},{"event_type":"Attack"},{"trigger":"untyped"}],"relation_mentions":[{"relation_type":"PHYS"}]}"#,
];
