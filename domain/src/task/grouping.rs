//! Review-meeting filtering and grouping.

use super::entities::Task;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Group label for tasks without a company
pub const NO_COMPANY: &str = "No Company";

/// Grouping axis for the review meeting view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupBy {
    #[default]
    TeamMember,
    Company,
    Priority,
}

impl GroupBy {
    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::TeamMember => "Team Member",
            GroupBy::Company => "Company",
            GroupBy::Priority => "Priority",
        }
    }

    fn key_for(&self, task: &Task) -> String {
        match self {
            GroupBy::TeamMember => task.assigned_to.clone(),
            GroupBy::Company => task.company.clone().unwrap_or_else(|| NO_COMPANY.to_string()),
            GroupBy::Priority => task.priority.to_string(),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for GroupBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "team-member" | "member" | "assignee" => Ok(GroupBy::TeamMember),
            "company" => Ok(GroupBy::Company),
            "priority" => Ok(GroupBy::Priority),
            _ => Err(DomainError::InvalidTask(format!("unknown grouping '{}'", s))),
        }
    }
}

/// Filter applied in the review meeting view.
///
/// `None` means "All". Completed tasks are never shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFilter {
    pub team_member: Option<String>,
    pub company: Option<String>,
}

impl ReviewFilter {
    /// Blank values mean no filter
    pub fn new(team_member: Option<String>, company: Option<String>) -> Self {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            team_member: non_blank(team_member),
            company: non_blank(company),
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        let member_match = self
            .team_member
            .as_deref()
            .is_none_or(|m| task.assigned_to == m);
        member_match && task.matches_company(self.company.as_deref()) && !task.is_completed()
    }

    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}

/// One named group of tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskGroup {
    pub name: String,
    pub tasks: Vec<Task>,
}

/// Group tasks, keeping groups in order of first appearance
pub fn group_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>, group_by: GroupBy) -> Vec<TaskGroup> {
    let mut groups: Vec<TaskGroup> = Vec::new();
    for task in tasks {
        let key = group_by.key_for(task);
        match groups.iter_mut().find(|g| g.name == key) {
            Some(group) => group.tasks.push(task.clone()),
            None => groups.push(TaskGroup {
                name: key,
                tasks: vec![task.clone()],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::entities::{Priority, TaskStatus};

    fn board() -> Vec<Task> {
        vec![
            Task::new("1", "audit", "Vedant").with_company("AWS").with_priority(Priority::High),
            Task::new("2", "docs", "Sarah").with_company("Nvidia").with_priority(Priority::High),
            Task::new("3", "costs", "Jimmy"),
            Task::new("4", "infra", "Vedant").with_company("AWS"),
            Task::new("5", "done", "Sarah")
                .with_company("Nvidia")
                .with_status(TaskStatus::Completed),
        ]
    }

    #[test]
    fn test_filter_excludes_completed() {
        let tasks = board();
        let visible = ReviewFilter::default().apply(&tasks);
        assert_eq!(visible.len(), 4);
        assert!(visible.iter().all(|t| t.id != "5"));
    }

    #[test]
    fn test_filter_by_member_and_company() {
        let tasks = board();
        let filter = ReviewFilter::new(Some("Vedant".to_string()), Some("AWS".to_string()));
        let ids: Vec<&str> = filter.apply(&tasks).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);

        let nobody = ReviewFilter::new(Some("Sarah".to_string()), Some("AWS".to_string()));
        assert!(nobody.apply(&tasks).is_empty());
    }

    #[test]
    fn test_blank_filter_values_match_everything() {
        let tasks = board();
        let filter = ReviewFilter::new(Some(String::new()), Some("  ".to_string()));
        assert_eq!(filter, ReviewFilter::default());
        assert_eq!(filter.apply(&tasks).len(), 4);
    }

    #[test]
    fn test_group_by_company_uses_placeholder() {
        let tasks = board();
        let groups = group_tasks(ReviewFilter::default().apply(&tasks), GroupBy::Company);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["AWS", "Nvidia", NO_COMPANY]);
        assert_eq!(groups[0].tasks.len(), 2);
    }

    #[test]
    fn test_group_by_member_preserves_first_seen_order() {
        let tasks = board();
        let groups = group_tasks(&tasks, GroupBy::TeamMember);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Vedant", "Sarah", "Jimmy"]);
    }

    #[test]
    fn test_group_by_priority() {
        let tasks = board();
        let groups = group_tasks(&tasks, GroupBy::Priority);
        assert_eq!(groups[0].name, "High");
        assert_eq!(groups[1].name, "Medium");
        assert_eq!(groups[1].tasks.len(), 3);
    }

    #[test]
    fn test_group_by_parse() {
        assert_eq!("team member".parse::<GroupBy>().unwrap(), GroupBy::TeamMember);
        assert_eq!("company".parse::<GroupBy>().unwrap(), GroupBy::Company);
        assert!("deadline".parse::<GroupBy>().is_err());
    }
}
