//! Annotated sentence records - one per line of a corpus split

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An entity mention inside a sentence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityMention {
    /// Entity label, e.g. `PER` or `GPE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,

    /// Everything else (id, text, offsets...), kept only for display
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A participant of an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// An event mention with its arguments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventMention {
    /// Event label, e.g. `Conflict:Attack`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub arguments: Vec<Argument>,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// One annotated sentence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub doc_id: Option<String>,

    #[serde(default)]
    pub sent_id: Option<String>,

    /// Raw sentence text
    #[serde(default)]
    pub sentence: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tokens: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub entity_mentions: Vec<EntityMention>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub event_mentions: Vec<EventMention>,

    /// Relations are not interpreted, only counted and displayed
    #[serde(default, deserialize_with = "null_as_default")]
    pub relation_mentions: Vec<Value>,
}

impl Document {
    /// Parse a single JSON object
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn has_events(&self) -> bool {
        !self.event_mentions.is_empty()
    }

    /// True if any event mention carries exactly this label
    pub fn has_event_type(&self, event_type: &str) -> bool {
        self.event_mentions
            .iter()
            .any(|event| event.event_type.as_deref() == Some(event_type))
    }

    /// True if any entity mention carries exactly this label
    pub fn has_entity_type(&self, entity_type: &str) -> bool {
        self.entity_mentions
            .iter()
            .any(|entity| entity.entity_type.as_deref() == Some(entity_type))
    }
}

/// Write a mention as compact JSON, the same shape it had in the corpus
fn write_json<T: Serialize>(f: &mut fmt::Formatter<'_>, value: &T) -> fmt::Result {
    let json = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    f.write_str(&json)
}

impl fmt::Display for EntityMention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self)
    }
}

impl fmt::Display for EventMention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_json(f, self)
    }
}
