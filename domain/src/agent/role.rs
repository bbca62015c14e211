//! Remote agent roles.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A remote agent's responsibility.
///
/// One manager coordinates seven sub-agents. Each role ships with the
/// identifier of the agent deployed for it; [`AgentDirectory`] lets
/// configuration replace those identifiers.
///
/// [`AgentDirectory`]: super::directory::AgentDirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentRole {
    Manager,
    SessionSync,
    TaskCollection,
    TaskUpdate,
    WeeklyReport,
    ReviewMeeting,
    MeetingAgenda,
    ArchiveManagement,
}

impl AgentRole {
    /// The seven sub-agents, in the order they are reported
    pub const SUB_AGENTS: [AgentRole; 7] = [
        AgentRole::SessionSync,
        AgentRole::TaskCollection,
        AgentRole::TaskUpdate,
        AgentRole::WeeklyReport,
        AgentRole::ReviewMeeting,
        AgentRole::MeetingAgenda,
        AgentRole::ArchiveManagement,
    ];

    /// Every role, manager first
    pub const ALL: [AgentRole; 8] = [
        AgentRole::Manager,
        AgentRole::SessionSync,
        AgentRole::TaskCollection,
        AgentRole::TaskUpdate,
        AgentRole::WeeklyReport,
        AgentRole::ReviewMeeting,
        AgentRole::MeetingAgenda,
        AgentRole::ArchiveManagement,
    ];

    /// Stable key used in health reports (`SESSION_SYNC`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            AgentRole::Manager => "MANAGER",
            AgentRole::SessionSync => "SESSION_SYNC",
            AgentRole::TaskCollection => "TASK_COLLECTION",
            AgentRole::TaskUpdate => "TASK_UPDATE",
            AgentRole::WeeklyReport => "WEEKLY_REPORT",
            AgentRole::ReviewMeeting => "REVIEW_MEETING",
            AgentRole::MeetingAgenda => "MEETING_AGENDA",
            AgentRole::ArchiveManagement => "ARCHIVE_MANAGEMENT",
        }
    }

    /// Human-readable agent name
    pub fn display_name(&self) -> &'static str {
        match self {
            AgentRole::Manager => "Task Management Manager Agent",
            AgentRole::SessionSync => "Session Sync Agent",
            AgentRole::TaskCollection => "Task Collection Agent",
            AgentRole::TaskUpdate => "Task Update Agent",
            AgentRole::WeeklyReport => "Weekly Report Agent",
            AgentRole::ReviewMeeting => "Review Meeting Agent",
            AgentRole::MeetingAgenda => "Meeting Agenda Agent",
            AgentRole::ArchiveManagement => "Archive Management Agent",
        }
    }

    /// Identifier of the deployed agent for this role
    pub fn default_id(&self) -> &'static str {
        match self {
            AgentRole::Manager => "69235d3623b88b385103da57",
            AgentRole::SessionSync => "69222c62c69ec8d9a07826da",
            AgentRole::TaskCollection => "69222c7423b88b385103d6f5",
            AgentRole::TaskUpdate => "69222c87eb6b7de42273d8c1",
            AgentRole::WeeklyReport => "69222c94c69ec8d9a07826db",
            AgentRole::ReviewMeeting => "69222ca57c7d73f7cbe8262c",
            AgentRole::MeetingAgenda => "69222cc57c7d73f7cbe8262d",
            AgentRole::ArchiveManagement => "69222cd1c69ec8d9a07826dc",
        }
    }

    pub fn is_manager(&self) -> bool {
        matches!(self, AgentRole::Manager)
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for AgentRole {
    type Err = DomainError;

    /// Accepts `SESSION_SYNC`, `session_sync` and `session-sync`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        AgentRole::ALL
            .into_iter()
            .find(|role| role.key() == normalized)
            .ok_or_else(|| DomainError::UnknownAgentRole(s.to_string()))
    }
}
