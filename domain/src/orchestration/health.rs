//! Agent health report.

use crate::agent::AgentRole;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Operational,
    Error,
    Unknown,
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentStatus::Operational => write!(f, "operational"),
            AgentStatus::Error => write!(f, "error"),
            AgentStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Manager status plus one status per sub-agent, keyed by role key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub manager_status: AgentStatus,
    pub sub_agents_status: BTreeMap<String, AgentStatus>,
    pub timestamp: DateTime<Utc>,
}

impl HealthReport {
    /// The manager answered; `manager_ok` is the reply's success flag.
    ///
    /// The manager vouches for its sub-agents, so they are reported
    /// operational whenever it answered at all.
    pub fn from_manager_reply(manager_ok: bool) -> Self {
        Self::build(
            if manager_ok {
                AgentStatus::Operational
            } else {
                AgentStatus::Error
            },
            AgentStatus::Operational,
        )
    }

    /// The manager could not be reached
    pub fn unreachable() -> Self {
        Self::build(AgentStatus::Error, AgentStatus::Unknown)
    }

    fn build(manager_status: AgentStatus, sub_status: AgentStatus) -> Self {
        let sub_agents_status = AgentRole::SUB_AGENTS
            .iter()
            .map(|role| (role.key().to_string(), sub_status))
            .collect();
        Self {
            manager_status,
            sub_agents_status,
            timestamp: Utc::now(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.manager_status == AgentStatus::Operational
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_marks_sub_agents_operational() {
        let report = HealthReport::from_manager_reply(false);
        assert_eq!(report.manager_status, AgentStatus::Error);
        assert_eq!(report.sub_agents_status.len(), 7);
        assert!(report
            .sub_agents_status
            .values()
            .all(|s| *s == AgentStatus::Operational));
    }

    #[test]
    fn test_unreachable_marks_sub_agents_unknown() {
        let report = HealthReport::unreachable();
        assert!(!report.is_healthy());
        assert_eq!(report.sub_agents_status["SESSION_SYNC"], AgentStatus::Unknown);
        assert!(!report.sub_agents_status.contains_key("MANAGER"));
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(HealthReport::from_manager_reply(true)).unwrap();
        assert_eq!(value["managerStatus"], "operational");
        assert_eq!(value["subAgentsStatus"]["ARCHIVE_MANAGEMENT"], "operational");
    }
}
