//! Weekly report figures computed from the local board.

use super::entities::Task;
use chrono::NaiveDate;
use serde::Serialize;

/// Count of tasks attributed to one name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    pub name: String,
    pub count: usize,
}

/// Local weekly report summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub company: Option<String>,
    pub total_tasks: usize,
    pub completed_this_week: usize,
    pub overdue_count: usize,
    pub team_breakdown: Vec<BreakdownEntry>,
    pub company_breakdown: Vec<BreakdownEntry>,
}

fn bump(entries: &mut Vec<BreakdownEntry>, name: &str) {
    match entries.iter_mut().find(|e| e.name == name) {
        Some(entry) => entry.count += 1,
        None => entries.push(BreakdownEntry {
            name: name.to_string(),
            count: 1,
        }),
    }
}

impl WeeklyReport {
    /// Compute the report, restricted to `company` when given.
    ///
    /// "Completed this week" counts every completed task; the board keeps no
    /// completion timestamp to narrow it further.
    pub fn compute(tasks: &[Task], company: Option<&str>, today: NaiveDate) -> Self {
        let scoped: Vec<&Task> = tasks.iter().filter(|t| t.matches_company(company)).collect();

        let mut team_breakdown = Vec::new();
        let mut company_breakdown = Vec::new();
        for task in &scoped {
            bump(&mut team_breakdown, &task.assigned_to);
            if let Some(c) = &task.company {
                bump(&mut company_breakdown, c);
            }
        }

        Self {
            company: company.map(str::to_string),
            total_tasks: scoped.len(),
            completed_this_week: scoped.iter().filter(|t| t.is_completed()).count(),
            overdue_count: scoped.iter().filter(|t| t.is_overdue(today)).count(),
            team_breakdown,
            company_breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::entities::TaskStatus;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn board() -> Vec<Task> {
        vec![
            Task::new("1", "audit", "Vedant")
                .with_company("AWS")
                .with_due_date(date("2024-11-01")),
            Task::new("2", "docs", "Sarah")
                .with_company("Nvidia")
                .with_status(TaskStatus::Completed),
            Task::new("3", "costs", "Jimmy"),
            Task::new("4", "infra", "Vedant")
                .with_company("AWS")
                .with_status(TaskStatus::Completed),
        ]
    }

    #[test]
    fn test_unfiltered_report() {
        let report = WeeklyReport::compute(&board(), None, date("2024-12-01"));
        assert_eq!(report.total_tasks, 4);
        assert_eq!(report.completed_this_week, 2);
        assert_eq!(report.overdue_count, 1);
        assert_eq!(
            report.team_breakdown,
            vec![
                BreakdownEntry { name: "Vedant".to_string(), count: 2 },
                BreakdownEntry { name: "Sarah".to_string(), count: 1 },
                BreakdownEntry { name: "Jimmy".to_string(), count: 1 },
            ]
        );
        // Tasks without a company are left out of the company breakdown
        assert_eq!(report.company_breakdown.len(), 2);
    }

    #[test]
    fn test_company_filter_scopes_every_figure() {
        let report = WeeklyReport::compute(&board(), Some("AWS"), date("2024-12-01"));
        assert_eq!(report.total_tasks, 2);
        assert_eq!(report.completed_this_week, 1);
        assert_eq!(report.overdue_count, 1);
        assert_eq!(report.team_breakdown.len(), 1);
        assert_eq!(report.company_breakdown[0].count, 2);
    }

    #[test]
    fn test_serializes_with_report_keys() {
        let report = WeeklyReport::compute(&[], None, date("2024-12-01"));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["completedThisWeek"], 0);
        assert!(json["teamBreakdown"].as_array().unwrap().is_empty());
    }
}
