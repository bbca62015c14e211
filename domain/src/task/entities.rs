//! Task entities
//!
//! Field names and enum spellings follow the board's JSON representation
//! (`assignedTo`, `"In Progress"`, ...), which is also what the remote
//! agents read and write.

use crate::core::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Archived,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "Open",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "open" => Ok(TaskStatus::Open),
            "in progress" => Ok(TaskStatus::InProgress),
            "completed" | "done" => Ok(TaskStatus::Completed),
            "archived" => Ok(TaskStatus::Archived),
            _ => Err(DomainError::InvalidTask(format!("unknown status '{}'", s))),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "h" => Ok(Priority::High),
            "medium" | "med" | "m" => Ok(Priority::Medium),
            "low" | "l" => Ok(Priority::Low),
            _ => Err(DomainError::InvalidTask(format!("unknown priority '{}'", s))),
        }
    }
}

/// Who owns the follow-up on a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskOwnerType {
    #[default]
    #[serde(rename = "Internal Team")]
    InternalTeam,
    #[serde(rename = "External Partner")]
    ExternalPartner,
}

impl TaskOwnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskOwnerType::InternalTeam => "Internal Team",
            TaskOwnerType::ExternalPartner => "External Partner",
        }
    }
}

impl fmt::Display for TaskOwnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a task's change history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLogEntry {
    pub timestamp: DateTime<Utc>,
    pub person: String,
    pub changes: String,
}

/// A tracked task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    pub assigned_to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_contact: Option<String>,
    #[serde(default)]
    pub task_owner_type: TaskOwnerType,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub update_log: Vec<UpdateLogEntry>,
    #[serde(default)]
    pub current_status: String,
}

impl Task {
    pub fn new(id: impl Into<String>, title: impl Into<String>, assigned_to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: TaskStatus::default(),
            assigned_to: assigned_to.into(),
            company: None,
            meeting: None,
            external_contact: None,
            task_owner_type: TaskOwnerType::default(),
            priority: Priority::default(),
            due_date: None,
            update_log: Vec::new(),
            current_status: String::new(),
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_meeting(mut self, meeting: impl Into<String>) -> Self {
        self.meeting = Some(meeting.into());
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    pub fn is_archived(&self) -> bool {
        self.status == TaskStatus::Archived
    }

    /// Due on or before `today` and not completed
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due <= today && !self.is_completed(),
            None => false,
        }
    }

    pub fn matches_company(&self, company: Option<&str>) -> bool {
        match company {
            None => true,
            Some(c) => self.company.as_deref() == Some(c),
        }
    }

    /// Validate the fields every board entry needs
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidTask("id is empty".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(DomainError::InvalidTask(format!("task {} has an empty title", self.id)));
        }
        Ok(())
    }
}
