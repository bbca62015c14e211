//! Task board state.
//!
//! The board is the dashboard's working copy of the task list. Edits are
//! applied here first and then forwarded to the remote agents, which own the
//! authoritative copy in Notion.

use super::changes::TaskChanges;
use super::entities::{Task, TaskStatus, UpdateLogEntry};
use super::stats::DashboardStats;
use crate::core::error::DomainError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of the most recent sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncRecord {
    pub at: DateTime<Utc>,
    pub success: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBoard {
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_sync: Option<SyncRecord>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            last_sync: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn last_sync(&self) -> Option<SyncRecord> {
        self.last_sync
    }

    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks shown on the dashboard (everything but archived)
    pub fn visible(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| !t.is_archived()).collect()
    }

    /// Completed tasks that can be archived
    pub fn archivable(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_completed()).collect()
    }

    pub fn stats(&self, today: NaiveDate) -> DashboardStats {
        DashboardStats::compute(&self.tasks, today)
    }

    /// Replace a task by id, appending an update-log entry for the change.
    ///
    /// Returns the field changes (possibly empty).
    pub fn replace(
        &mut self,
        mut updated: Task,
        person: &str,
        now: DateTime<Utc>,
    ) -> Result<TaskChanges, DomainError> {
        updated.validate()?;
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == updated.id)
            .ok_or_else(|| DomainError::TaskNotFound(updated.id.clone()))?;

        let changes = TaskChanges::between(&self.tasks[index], &updated);
        if !changes.is_empty() {
            updated.update_log.push(UpdateLogEntry {
                timestamp: now,
                person: person.to_string(),
                changes: changes.describe(),
            });
        }
        self.tasks[index] = updated;
        Ok(changes)
    }

    /// Append tasks, skipping invalid ones and ids already on the board.
    ///
    /// Returns the ids that were added.
    pub fn add_new(&mut self, tasks: Vec<Task>) -> Vec<String> {
        let mut added = Vec::new();
        for task in tasks {
            if task.validate().is_err() || self.find(&task.id).is_some() {
                continue;
            }
            added.push(task.id.clone());
            self.tasks.push(task);
        }
        added
    }

    /// Replace the whole task list with the remote state
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Mark completed tasks as archived.
    ///
    /// Either every id is archivable and all are archived, or nothing changes.
    pub fn archive(
        &mut self,
        ids: &[String],
        person: &str,
        now: DateTime<Utc>,
    ) -> Result<usize, DomainError> {
        if ids.is_empty() {
            return Err(DomainError::EmptySelection);
        }
        for id in ids {
            let task = self
                .find(id)
                .ok_or_else(|| DomainError::TaskNotFound(id.clone()))?;
            if !task.is_completed() {
                return Err(DomainError::NotArchivable(id.clone()));
            }
        }

        let mut archived = 0;
        for task in self.tasks.iter_mut().filter(|t| ids.contains(&t.id)) {
            task.status = TaskStatus::Archived;
            task.update_log.push(UpdateLogEntry {
                timestamp: now,
                person: person.to_string(),
                changes: "Status: Completed -> Archived".to_string(),
            });
            archived += 1;
        }
        Ok(archived)
    }

    pub fn record_sync(&mut self, success: bool, now: DateTime<Utc>) {
        self.last_sync = Some(SyncRecord { at: now, success });
    }

    /// Header line describing the last sync
    pub fn sync_status(&self, now: DateTime<Utc>) -> String {
        match self.last_sync {
            None => "Never synced".to_string(),
            Some(SyncRecord { success: false, .. }) => "Sync failed".to_string(),
            Some(SyncRecord { at, success: true }) => {
                let seconds = (now - at).num_seconds().max(0);
                match seconds {
                    0..=9 => "Synced just now".to_string(),
                    10..=119 => format!("Synced {} seconds ago", seconds),
                    120..=7199 => format!("Synced {} minutes ago", seconds / 60),
                    _ => format!("Synced {} hours ago", seconds / 3600),
                }
            }
        }
    }
}
