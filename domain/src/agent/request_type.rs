//! Request type tags.

use super::role::AgentRole;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of request forwarded to the remote agents.
///
/// The tag is what the dashboard attaches to every outbound request; routing
/// resolves it to exactly one [`AgentRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestType {
    SyncSession,
    ScanTasks,
    UpdateTask,
    GenerateReport,
    ReviewMeeting,
    GenerateAgenda,
    ArchiveTasks,
    HealthCheck,
}

impl RequestType {
    /// All request types, in dashboard order
    pub const ALL: [RequestType; 8] = [
        RequestType::SyncSession,
        RequestType::ScanTasks,
        RequestType::UpdateTask,
        RequestType::GenerateReport,
        RequestType::ReviewMeeting,
        RequestType::GenerateAgenda,
        RequestType::ArchiveTasks,
        RequestType::HealthCheck,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::SyncSession => "sync-session",
            RequestType::ScanTasks => "scan-tasks",
            RequestType::UpdateTask => "update-task",
            RequestType::GenerateReport => "generate-report",
            RequestType::ReviewMeeting => "review-meeting",
            RequestType::GenerateAgenda => "generate-agenda",
            RequestType::ArchiveTasks => "archive-tasks",
            RequestType::HealthCheck => "health-check",
        }
    }

    /// The agent role responsible for this request type.
    ///
    /// Health checks go to the manager; everything else has a dedicated
    /// sub-agent.
    pub fn target_role(&self) -> AgentRole {
        match self {
            RequestType::SyncSession => AgentRole::SessionSync,
            RequestType::ScanTasks => AgentRole::TaskCollection,
            RequestType::UpdateTask => AgentRole::TaskUpdate,
            RequestType::GenerateReport => AgentRole::WeeklyReport,
            RequestType::ReviewMeeting => AgentRole::ReviewMeeting,
            RequestType::GenerateAgenda => AgentRole::MeetingAgenda,
            RequestType::ArchiveTasks => AgentRole::ArchiveManagement,
            RequestType::HealthCheck => AgentRole::Manager,
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequestType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| DomainError::UnknownRequestType(s.to_string()))
    }
}
