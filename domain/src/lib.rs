//! Domain layer for taskdesk
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Agents
//!
//! A manager agent and seven sub-agents run remotely. Every dashboard action
//! is a [`RequestType`]; the fixed routing table maps it to one
//! [`AgentRole`], and the [`AgentDirectory`] resolves that role to the
//! deployed agent's identifier.
//!
//! ## Orchestration
//!
//! [`RequestTemplate`] builds the natural-language instruction for each
//! action. Dispatch results come back as [`OrchestratorResponse`], carrying
//! the remote response verbatim.
//!
//! ## Task board
//!
//! [`TaskBoard`] is the dashboard's working copy of the task list, with the
//! views computed from it (counters, review grouping, weekly report).

pub mod agent;
pub mod config;
pub mod core;
pub mod orchestration;
pub mod task;
pub mod util;

// Re-export commonly used types
pub use agent::{AgentDirectory, AgentId, AgentRole, RequestType, RouteTarget, UNKNOWN_AGENT_NAME};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use orchestration::{
    AgentStatus, DispatchMode, HealthReport, OrchestratorRequest, OrchestratorResponse,
    RequestTemplate,
};
pub use task::{
    BreakdownEntry, DashboardStats, DuplicateCandidate, FieldChange, GroupBy, NO_COMPANY,
    Priority, ReviewFilter, ScanResult, SyncRecord, Task, TaskBoard, TaskChanges, TaskGroup,
    TaskOwnerType, TaskStatus, UpdateLogEntry, WeeklyReport, decode_task_list, group_tasks,
};
pub use util::{json_candidates, preview, truncate_str};
