//! Frontend Models
//!
//! Data structures matching the todo service's JSON.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Label shown for items generated without a vibe
pub const FREESTYLE_VIBE: &str = "freestyle";

/// Server-assigned item identifier.
///
/// The service may send ids as strings or numbers; both are kept as the
/// string form and never interpreted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => TaskId(s),
            RawId::Number(n) => TaskId(n.to_string()),
        })
    }
}

/// Priority assigned by the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Anything that is neither high nor medium renders as low
impl From<String> for Priority {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One todo entry, generated or loaded
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub vibe: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

impl TaskItem {
    /// Vibe label for display, `freestyle` when absent or blank
    pub fn vibe_label(&self) -> &str {
        match self.vibe.as_deref() {
            Some(v) if !v.trim().is_empty() => v,
            _ => FREESTYLE_VIBE,
        }
    }

    /// `completed` value a click on the row's checkbox asks for
    pub fn toggle_target(&self) -> bool {
        !self.completed
    }
}

// ========================
// Wire Payloads
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub vibe: String,
    pub count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub items: Vec<TaskItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateCompletedRequest {
    pub completed: bool,
}
