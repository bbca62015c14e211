//! Agent identifiers and the role → identifier directory.

use super::request_type::RequestType;
use super::role::AgentRole;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Identifier of a deployed remote agent (opaque to this crate).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name reported for identifiers the directory does not know.
pub const UNKNOWN_AGENT_NAME: &str = "Unknown Agent";

/// Resolved routing target for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
    pub role: AgentRole,
    pub agent_id: AgentId,
}

impl RouteTarget {
    pub fn agent_name(&self) -> &'static str {
        self.role.display_name()
    }
}

/// Role → identifier table.
///
/// Starts from [`AgentRole::default_id`] for every role. Overrides replace
/// single entries, so a partially configured directory still routes every
/// request type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDirectory {
    ids: HashMap<AgentRole, AgentId>,
}

impl Default for AgentDirectory {
    fn default() -> Self {
        let ids = AgentRole::ALL
            .into_iter()
            .map(|role| (role, AgentId::new(role.default_id())))
            .collect();
        Self { ids }
    }
}

impl AgentDirectory {
    /// Builder-style override of one role's identifier
    pub fn with_override(mut self, role: AgentRole, id: impl Into<AgentId>) -> Self {
        self.ids.insert(role, id.into());
        self
    }

    pub fn set(&mut self, role: AgentRole, id: impl Into<AgentId>) {
        self.ids.insert(role, id.into());
    }

    pub fn id_for(&self, role: AgentRole) -> &AgentId {
        // Every role is inserted by `Default` and never removed.
        &self.ids[&role]
    }

    pub fn manager(&self) -> &AgentId {
        self.id_for(AgentRole::Manager)
    }

    /// Resolve the agent responsible for a request type
    pub fn route(&self, request_type: RequestType) -> RouteTarget {
        let role = request_type.target_role();
        RouteTarget {
            role,
            agent_id: self.id_for(role).clone(),
        }
    }

    /// Reverse lookup of an identifier
    pub fn role_of(&self, id: &AgentId) -> Option<AgentRole> {
        AgentRole::ALL
            .into_iter()
            .find(|role| self.id_for(*role) == id)
    }

    /// Human-readable name for an identifier, [`UNKNOWN_AGENT_NAME`] if absent
    pub fn name_of(&self, id: &AgentId) -> &'static str {
        self.role_of(id)
            .map(|role| role.display_name())
            .unwrap_or(UNKNOWN_AGENT_NAME)
    }

    /// Sub-agents with their identifiers, in report order
    pub fn sub_agents(&self) -> Vec<(AgentRole, &AgentId)> {
        AgentRole::SUB_AGENTS
            .into_iter()
            .map(|role| (role, self.id_for(role)))
            .collect()
    }

    /// Full routing table, one row per request type
    pub fn routing_table(&self) -> Vec<(RequestType, RouteTarget)> {
        RequestType::ALL
            .into_iter()
            .map(|t| (t, self.route(t)))
            .collect()
    }
}
