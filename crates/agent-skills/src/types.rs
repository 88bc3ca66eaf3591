//! Core types: parsed skill metadata and the tool descriptors derived
//! from it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Reserved metadata key holding the trimmed document body.
pub const BODY_KEY: &str = "body";

/// Flat key/value metadata parsed from a SKILL.md frontmatter header.
///
/// Keys iterate in first-seen order. A repeated key overwrites its
/// value in place, keeping the original position. The document body is
/// stored under the reserved [`BODY_KEY`] entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillMetadata {
    entries: Vec<(String, String)>,
}

impl SkillMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key/value pair. Last write wins.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The trimmed document body, empty if the document had none.
    pub fn body(&self) -> &str {
        self.get(BODY_KEY).unwrap_or("")
    }

    /// Iterate entries in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A named, schema-bearing tool advertisement handed to the agent
/// runtime for tool selection.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    /// Tool identifier. Empty when the header omitted `name`; such a
    /// descriptor never matches a lookup and callers must treat it as
    /// unusable.
    pub name: String,

    /// Short description shown to the LLM.
    pub description: String,

    /// Fixed object schema accepting one optional string property
    /// `query`.
    pub input_schema: Value,

    /// The skill's markdown body. Not part of the agent-facing schema.
    #[serde(skip)]
    pub skill_body: String,

    /// Where the skill was loaded from, for diagnostics.
    #[serde(skip)]
    pub skill_source_path: PathBuf,
}

impl ToolDescriptor {
    /// Build a descriptor from parsed metadata and its source location.
    pub fn from_metadata(metadata: &SkillMetadata, source_path: &Path) -> Self {
        Self {
            name: metadata.get("name").unwrap_or_default().to_owned(),
            description: metadata.get("description").unwrap_or_default().to_owned(),
            input_schema: query_input_schema(),
            skill_body: metadata.body().to_owned(),
            skill_source_path: source_path.to_path_buf(),
        }
    }
}

/// The input schema every skill tool advertises.
pub fn query_input_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "query": {
                "type": "string",
                "description": "User query or parameters for the skill"
            }
        },
        "required": []
    })
}

/// Input payload for a skill invocation, decoded from the runtime's
/// tool-call JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillInvocation {
    /// Free-form query text supplied by the caller, if any.
    pub query: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
