//! Request templates, one per dashboard action.

use super::request::OrchestratorRequest;
use crate::agent::RequestType;
use serde_json::{Value, json};

/// Builders for the requests the dashboard sends
pub struct RequestTemplate;

/// Blank filter values mean "all"
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl RequestTemplate {
    pub fn sync_session() -> OrchestratorRequest {
        OrchestratorRequest::new(
            RequestType::SyncSession,
            "Sync and fetch the complete current task state from Notion database",
        )
        .with_context("action", "initialize")
    }

    pub fn scan_tasks() -> OrchestratorRequest {
        OrchestratorRequest::new(
            RequestType::ScanTasks,
            "Scan Gmail inbox and sent folder, Google Drive meeting notes for new tasks with company detection and deduplication",
        )
        .with_context("action", "extract")
    }

    pub fn update_task(task_id: &str, updates: Value) -> OrchestratorRequest {
        let updates_json = serde_json::to_string(&updates).unwrap_or_else(|_| "{}".to_string());
        OrchestratorRequest::new(
            RequestType::UpdateTask,
            format!("Update task {} with changes: {}", task_id, updates_json),
        )
        .with_context("taskId", task_id)
        .with_context("updates", updates)
    }

    pub fn generate_report(company: Option<&str>) -> OrchestratorRequest {
        let company = non_blank(company);
        let message = match company {
            Some(c) => format!("Generate weekly report filtered by company: {}", c),
            None => {
                "Generate comprehensive weekly report with team member and company breakdown"
                    .to_string()
            }
        };
        OrchestratorRequest::new(RequestType::GenerateReport, message)
            .with_optional_context("company", company)
    }

    pub fn start_review_meeting(team_member: Option<&str>, company: Option<&str>) -> OrchestratorRequest {
        let team_member = non_blank(team_member);
        let company = non_blank(company);
        let mut message = "Start review meeting".to_string();
        if let Some(member) = team_member {
            message.push_str(&format!(" for {}", member));
        }
        if let Some(c) = company {
            message.push_str(&format!(" and {}", c));
        }
        OrchestratorRequest::new(RequestType::ReviewMeeting, message)
            .with_optional_context("teamMember", team_member)
            .with_optional_context("company", company)
    }

    pub fn generate_agenda(company: &str, meeting_date: &str) -> OrchestratorRequest {
        OrchestratorRequest::new(
            RequestType::GenerateAgenda,
            format!(
                "Generate meeting agenda for {} on {} including open tasks and recent emails",
                company, meeting_date
            ),
        )
        .with_context("company", company)
        .with_context("meetingDate", meeting_date)
    }

    pub fn archive_tasks(task_ids: &[String]) -> OrchestratorRequest {
        OrchestratorRequest::new(
            RequestType::ArchiveTasks,
            format!(
                "Archive {} completed tasks and log archival actions",
                task_ids.len()
            ),
        )
        .with_context("taskIds", json!(task_ids))
    }

    pub fn health_check() -> OrchestratorRequest {
        OrchestratorRequest::new(
            RequestType::HealthCheck,
            "Perform system health check and verify all agents are operational",
        )
        .with_context("action", "health-check")
    }
}
