//! Outbound orchestrator request.

use crate::agent::RequestType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A request tagged with its type, ready to be dispatched to an agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorRequest {
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub message: String,
    #[serde(default)]
    pub context: Map<String, Value>,
}

impl OrchestratorRequest {
    pub fn new(request_type: RequestType, message: impl Into<String>) -> Self {
        Self {
            request_type,
            message: message.into(),
            context: Map::new(),
        }
    }

    /// Add one context entry
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Add a context entry only when there is a value
    pub fn with_optional_context(self, key: impl Into<String>, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.with_context(key, value),
            None => self,
        }
    }

    /// Message text sent to the agent: the instruction followed by the
    /// context as compact JSON.
    pub fn outbound_message(&self) -> String {
        let context = serde_json::to_string(&self.context).unwrap_or_else(|_| "{}".to_string());
        format!("{}\n\nContext: {}", self.message, context)
    }
}
