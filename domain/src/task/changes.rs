//! Field-level diff between two versions of a task.

use super::entities::Task;
use serde_json::{Map, Value};

/// A single changed field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// Board JSON key (`assignedTo`, `status`, ...)
    pub key: &'static str,
    /// Label used in update-log entries
    pub label: &'static str,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// All changed fields between two versions of the same task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub changes: Vec<FieldChange>,
}

impl TaskChanges {
    pub fn between(old: &Task, new: &Task) -> Self {
        let mut changes = Vec::new();
        let mut push = |key, label, from: Option<String>, to: Option<String>| {
            if from != to {
                changes.push(FieldChange { key, label, from, to });
            }
        };

        push("title", "Title", Some(old.title.clone()), Some(new.title.clone()));
        push(
            "status",
            "Status",
            Some(old.status.to_string()),
            Some(new.status.to_string()),
        );
        push(
            "assignedTo",
            "Assigned To",
            Some(old.assigned_to.clone()),
            Some(new.assigned_to.clone()),
        );
        push("company", "Company", old.company.clone(), new.company.clone());
        push("meeting", "Meeting", old.meeting.clone(), new.meeting.clone());
        push(
            "externalContact",
            "External Contact",
            old.external_contact.clone(),
            new.external_contact.clone(),
        );
        push(
            "taskOwnerType",
            "Owner",
            Some(old.task_owner_type.to_string()),
            Some(new.task_owner_type.to_string()),
        );
        push(
            "priority",
            "Priority",
            Some(old.priority.to_string()),
            Some(new.priority.to_string()),
        );
        push(
            "dueDate",
            "Due Date",
            old.due_date.map(|d| d.to_string()),
            new.due_date.map(|d| d.to_string()),
        );
        push(
            "currentStatus",
            "Current Status",
            Some(old.current_status.clone()),
            Some(new.current_status.clone()),
        );

        Self { changes }
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Update-log text, e.g. `Status: Open -> In Progress`
    pub fn describe(&self) -> String {
        self.changes
            .iter()
            .map(|c| {
                format!(
                    "{}: {} -> {}",
                    c.label,
                    c.from.as_deref().unwrap_or("none"),
                    c.to.as_deref().unwrap_or("none")
                )
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// New values keyed by board JSON key, `null` for cleared fields
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .changes
            .iter()
            .map(|c| {
                let value = c.to.clone().map(Value::String).unwrap_or(Value::Null);
                (c.key.to_string(), value)
            })
            .collect();
        Value::Object(map)
    }
}
