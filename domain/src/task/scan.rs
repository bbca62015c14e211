//! Scan results returned by the task collection agent.

use super::entities::Task;
use crate::util::json_candidates;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A task the agent believes already exists on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateCandidate {
    pub title: String,
    pub person: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// Outcome of scanning mail and meeting notes for new tasks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    #[serde(default)]
    pub new_tasks: Vec<Task>,
    #[serde(default)]
    pub duplicates: Vec<DuplicateCandidate>,
    #[serde(default)]
    pub updated_tasks: Vec<Task>,
    #[serde(default)]
    pub scan_timestamp: Option<String>,
}

impl ScanResult {
    /// Decode a scan result from whatever the agent returned.
    ///
    /// Accepts a JSON object, a JSON string holding the object, or text with a
    /// ` ```json` fenced block. Individual tasks that do not decode are
    /// skipped. Returns `None` when no `newTasks` array is found.
    pub fn from_agent_response(response: &Value) -> Option<Self> {
        match response {
            Value::Object(_) => Self::from_json(response),
            Value::String(text) => Self::from_text(text),
            _ => None,
        }
    }

    fn from_text(text: &str) -> Option<Self> {
        json_candidates(text)
            .iter()
            .find_map(|candidate| Self::from_json(candidate))
    }

    fn from_json(json: &Value) -> Option<Self> {
        // Some agents wrap the payload one level down
        if json.get("newTasks").is_none() {
            for key in ["scanResult", "result", "data"] {
                if let Some(inner) = json.get(key).filter(|v| v.get("newTasks").is_some()) {
                    return Self::from_json(inner);
                }
            }
            return None;
        }

        let tasks = |key: &str| -> Vec<Task> {
            json.get(key)
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| serde_json::from_value::<Task>(item.clone()).ok())
                        .collect()
                })
                .unwrap_or_default()
        };

        let duplicates = json
            .get("duplicates")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| serde_json::from_value(item.clone()).ok())
                    .collect()
            })
            .unwrap_or_default();

        Some(Self {
            new_tasks: tasks("newTasks"),
            duplicates,
            updated_tasks: tasks("updatedTasks"),
            scan_timestamp: json
                .get("scanTimestamp")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }

    /// New tasks whose ids are in `ids`
    pub fn select(&self, ids: &[String]) -> Vec<Task> {
        self.new_tasks
            .iter()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "Found {} new tasks, {} potential duplicates",
            self.new_tasks.len(),
            self.duplicates.len()
        )
    }
}
