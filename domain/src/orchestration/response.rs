//! Result of dispatching a request.

use crate::agent::{AgentId, RequestType, RouteTarget};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the dashboard shows after a dispatch.
///
/// `response` and `raw_response` are whatever the remote API returned; no
/// interpretation happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorResponse {
    pub success: bool,
    pub request_type: RequestType,
    pub routed_to_agent: AgentId,
    pub agent_name: String,
    pub response: Value,
    #[serde(rename = "raw_response")]
    pub raw_response: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "executionTime")]
    pub execution_time_ms: u64,
}

impl OrchestratorResponse {
    pub fn from_reply(
        request_type: RequestType,
        target: &RouteTarget,
        success: bool,
        response: Value,
        raw_response: String,
        execution_time_ms: u64,
    ) -> Self {
        Self {
            success,
            request_type,
            routed_to_agent: target.agent_id.clone(),
            agent_name: target.agent_name().to_string(),
            response,
            raw_response,
            timestamp: Utc::now(),
            execution_time_ms,
        }
    }

    /// Failed dispatch: no response, the error text as raw response
    pub fn failure(
        request_type: RequestType,
        target: &RouteTarget,
        error: impl Into<String>,
        execution_time_ms: u64,
    ) -> Self {
        Self::from_reply(
            request_type,
            target,
            false,
            Value::Null,
            error.into(),
            execution_time_ms,
        )
    }

    /// Text to show for the agent's answer: the decoded response when it is
    /// a string, its pretty JSON otherwise, falling back to the raw body
    pub fn display_text(&self) -> String {
        match &self.response {
            Value::Null => self.raw_response.clone(),
            Value::String(s) => s.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| self.raw_response.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentDirectory;
    use serde_json::json;

    #[test]
    fn test_serialized_field_names() {
        let target = AgentDirectory::default().route(RequestType::GenerateReport);
        let response = OrchestratorResponse::from_reply(
            RequestType::GenerateReport,
            &target,
            true,
            json!({"summary": "ok"}),
            "{\"response\":{\"summary\":\"ok\"}}".to_string(),
            120,
        );
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["requestType"], "generate-report");
        assert_eq!(value["routedToAgent"], "69222c94c69ec8d9a07826db");
        assert_eq!(value["agentName"], "Weekly Report Agent");
        assert_eq!(value["executionTime"], 120);
        assert!(value.get("raw_response").is_some());
    }

    #[test]
    fn test_failure_keeps_error_text() {
        let target = AgentDirectory::default().route(RequestType::ScanTasks);
        let response = OrchestratorResponse::failure(RequestType::ScanTasks, &target, "connection refused", 3);
        assert!(!response.success);
        assert!(response.response.is_null());
        assert_eq!(response.display_text(), "connection refused");
    }

    #[test]
    fn test_display_text_prefers_string_response() {
        let target = AgentDirectory::default().route(RequestType::SyncSession);
        let response = OrchestratorResponse::from_reply(
            RequestType::SyncSession,
            &target,
            true,
            json!("All 3 tasks synced"),
            "raw".to_string(),
            1,
        );
        assert_eq!(response.display_text(), "All 3 tasks synced");
    }
}
