//! Dashboard counters.

use super::entities::{Task, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// Counters shown at the top of the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub overdue: usize,
}

impl DashboardStats {
    /// Count over every task on the board, archived ones included in `total`
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();
        Self {
            total: tasks.len(),
            open: count(TaskStatus::Open),
            in_progress: count(TaskStatus::InProgress),
            completed: count(TaskStatus::Completed),
            overdue: tasks.iter().filter(|t| t.is_overdue(today)).count(),
        }
    }
}
