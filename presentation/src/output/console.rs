//! Console output formatter for dashboard results

use colored::{ColoredString, Colorize};
use serde::Serialize;
use taskdesk_application::{
    AgendaOutcome, ArchiveOutcome, DashboardView, ReportOutcome, ReviewOutcome, SaveOutcome,
    ScanOutcome, SyncOutcome,
};
use taskdesk_domain::{
    AgentDirectory, AgentStatus, BreakdownEntry, DispatchMode, HealthReport, OrchestratorResponse,
    Priority, Task, TaskStatus, truncate_str,
};

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Pretty JSON for `--output json`
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// The agent's answer with routing details
    pub fn format_response(response: &OrchestratorResponse) -> String {
        let mut output = String::new();

        let status = if response.success {
            "ok".green().bold()
        } else {
            "failed".red().bold()
        };
        output.push_str(&format!(
            "{} {} {} {} ({} ms)\n",
            "Agent:".cyan().bold(),
            response.agent_name,
            format!("[{}]", response.routed_to_agent).dimmed(),
            status,
            response.execution_time_ms
        ));
        output.push_str(&format!("\n{}\n", response.display_text()));

        output
    }

    pub fn format_dashboard(view: &DashboardView) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Task Dashboard"));
        output.push('\n');
        output.push_str(&format!("{}\n\n", view.sync_status.dimmed()));

        let stats = &view.stats;
        output.push_str(&format!(
            "{} {}   {} {}   {} {}   {} {}   {} {}\n",
            "Total".bold(),
            stats.total,
            "Open".bold(),
            stats.open,
            "In Progress".bold(),
            stats.in_progress.to_string().yellow(),
            "Completed".bold(),
            stats.completed.to_string().green(),
            "Overdue".bold(),
            if stats.overdue > 0 {
                stats.overdue.to_string().red()
            } else {
                stats.overdue.to_string().normal()
            },
        ));

        output.push_str(&Self::section_header("Tasks"));
        if view.tasks.is_empty() {
            output.push_str("  (no tasks; run `taskdesk sync` or `taskdesk scan`)\n");
        } else {
            output.push_str(&Self::task_table(&view.tasks));
        }

        if view.archivable > 0 {
            output.push_str(&format!(
                "\n{} completed task(s) can be archived\n",
                view.archivable
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_sync(outcome: &SyncOutcome) -> String {
        let mut output = Self::format_response(&outcome.response);
        output.push('\n');
        match outcome.refreshed {
            Some(count) => output.push_str(&format!(
                "{} Board refreshed with {} tasks\n",
                "v".green(),
                count
            )),
            None if outcome.response.success => output.push_str(&format!(
                "{} Reply held no task list; board unchanged\n",
                "-".dimmed()
            )),
            None => {}
        }
        output.push_str(&format!("{}\n", outcome.sync_status.dimmed()));
        output
    }

    pub fn format_save(outcome: &SaveOutcome) -> String {
        let mut output = String::new();
        match &outcome.response {
            None => output.push_str(&format!(
                "Task {} unchanged, nothing sent\n",
                outcome.task.id
            )),
            Some(response) => {
                output.push_str(&format!(
                    "{} Task {} updated: {}\n",
                    "v".green(),
                    outcome.task.id,
                    outcome.changes.join(", ")
                ));
                if let Some(entry) = outcome.task.update_log.last() {
                    output.push_str(&format!(
                        "  {}\n",
                        format!("{} by {}: {}", entry.timestamp.format("%Y-%m-%d %H:%M"), entry.person, entry.changes)
                            .dimmed()
                    ));
                }
                output.push('\n');
                output.push_str(&Self::format_response(response));
            }
        }
        output
    }

    pub fn format_scan(outcome: &ScanOutcome, added: &[String]) -> String {
        let mut output = Self::format_response(&outcome.response);

        let Some(result) = &outcome.result else {
            return output;
        };

        output.push_str(&Self::section_header("Scan Results"));
        output.push_str(&format!("{}\n", result.summary()));
        if !result.new_tasks.is_empty() {
            output.push('\n');
            output.push_str(&Self::task_table(&result.new_tasks));
        }
        if !result.duplicates.is_empty() {
            output.push_str(&format!("\n{}\n", "Potential duplicates:".yellow().bold()));
            for duplicate in &result.duplicates {
                output.push_str(&format!(
                    "  * {} ({}{})\n",
                    duplicate.title,
                    duplicate.person,
                    duplicate
                        .company
                        .as_deref()
                        .map(|c| format!(", {}", c))
                        .unwrap_or_default()
                ));
            }
        }
        if !added.is_empty() {
            output.push_str(&format!(
                "\n{} Added to board: {}\n",
                "v".green(),
                added.join(", ")
            ));
        } else if !result.new_tasks.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                "Use --add <ID> or --add-all to add tasks to the board".dimmed()
            ));
        }
        output
    }

    pub fn format_archive(outcome: &ArchiveOutcome) -> String {
        let mut output = format!("{} Archived {} task(s)\n\n", "v".green(), outcome.archived);
        output.push_str(&Self::format_response(&outcome.response));
        output
    }

    pub fn format_report(outcome: &ReportOutcome) -> String {
        let report = &outcome.report;
        let mut output = String::new();

        let title = match &report.company {
            Some(company) => format!("Weekly Report: {}", company),
            None => "Weekly Report".to_string(),
        };
        output.push_str(&Self::header(&title));
        output.push('\n');
        output.push_str(&format!(
            "{} {}   {} {}   {} {}\n",
            "Tasks".bold(),
            report.total_tasks,
            "Completed".bold(),
            report.completed_this_week.to_string().green(),
            "Overdue".bold(),
            report.overdue_count.to_string().red(),
        ));
        output.push_str(&Self::breakdown("By Team Member", &report.team_breakdown));
        output.push_str(&Self::breakdown("By Company", &report.company_breakdown));

        output.push_str(&Self::section_header("Agent Report"));
        output.push_str(&Self::format_response(&outcome.response));
        output.push_str(&Self::footer());
        output
    }

    pub fn format_review(outcome: &ReviewOutcome) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!(
            "Review Meeting (by {})",
            outcome.group_by
        )));
        output.push('\n');

        if outcome.groups.is_empty() {
            output.push_str("No unfinished tasks match the filter\n");
        }
        for group in &outcome.groups {
            output.push_str(&format!(
                "\n{} {}\n",
                format!("── {} ──", group.name).yellow().bold(),
                format!("({})", group.tasks.len()).dimmed()
            ));
            output.push_str(&Self::task_table(&group.tasks));
        }

        output.push_str(&Self::section_header("Agent"));
        output.push_str(&Self::format_response(&outcome.response));
        output.push_str(&Self::footer());
        output
    }

    pub fn format_agenda(outcome: &AgendaOutcome) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!(
            "Agenda: {} on {}",
            outcome.company, outcome.meeting_date
        )));
        output.push('\n');

        output.push_str(&Self::section_header("Open Tasks"));
        if outcome.open_tasks.is_empty() {
            output.push_str("  (none on the board)\n");
        } else {
            output.push_str(&Self::task_table(&outcome.open_tasks));
        }

        output.push_str(&Self::section_header("Agenda"));
        output.push_str(&Self::format_response(&outcome.response));
        output.push_str(&Self::footer());
        output
    }

    pub fn format_health(report: &HealthReport) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Manager:".cyan().bold(),
            Self::agent_status(report.manager_status)
        ));
        for (key, status) in &report.sub_agents_status {
            output.push_str(&format!("  {:<20} {}\n", key, Self::agent_status(*status)));
        }
        output.push_str(&format!(
            "{}\n",
            format!("Checked at {}", report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")).dimmed()
        ));
        output
    }

    pub fn format_routing_table(directory: &AgentDirectory, mode: DispatchMode) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {} ({})\n\n",
            "Manager:".cyan().bold(),
            directory.manager(),
            directory.name_of(directory.manager())
        ));
        for (request_type, target) in directory.routing_table() {
            output.push_str(&format!(
                "  {:<16} -> {:<32} {}\n",
                request_type.as_str(),
                target.agent_name(),
                target.agent_id.to_string().dimmed()
            ));
        }
        let how = if mode.is_direct() {
            "Requests are sent straight to the routed agent"
        } else {
            "Requests are sent to the manager, which forwards them"
        };
        output.push_str(&format!("\n{}\n", how.dimmed()));
        output
    }

    fn task_table(tasks: &[Task]) -> String {
        let mut output = format!(
            "  {:<6} {:<36} {:<12} {:<14} {:<16} {:<8} {}\n",
            "ID", "Title", "Status", "Assignee", "Company", "Priority", "Due"
        )
        .bold()
        .to_string();
        for task in tasks {
            output.push_str(&format!(
                "  {:<6} {:<36} {:<12} {:<14} {:<16} {:<8} {}\n",
                truncate_str(&task.id, 6),
                truncate_str(&task.title, 36),
                Self::status(task.status),
                truncate_str(&task.assigned_to, 14),
                truncate_str(task.company.as_deref().unwrap_or("-"), 16),
                Self::priority(task.priority),
                task.due_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
            ));
        }
        output
    }

    fn breakdown(title: &str, entries: &[BreakdownEntry]) -> String {
        if entries.is_empty() {
            return String::new();
        }
        let mut output = Self::section_header(title);
        for entry in entries {
            output.push_str(&format!("  {:<24} {}\n", entry.name, entry.count));
        }
        output
    }

    // Padding is applied before coloring so escape codes don't skew columns
    fn status(status: TaskStatus) -> ColoredString {
        let text = format!("{:<12}", status.as_str());
        match status {
            TaskStatus::Open => text.normal(),
            TaskStatus::InProgress => text.yellow(),
            TaskStatus::Completed => text.green(),
            TaskStatus::Archived => text.dimmed(),
        }
    }

    fn priority(priority: Priority) -> ColoredString {
        let text = format!("{:<8}", priority.as_str());
        match priority {
            Priority::High => text.red(),
            Priority::Medium => text.normal(),
            Priority::Low => text.dimmed(),
        }
    }

    fn agent_status(status: AgentStatus) -> ColoredString {
        match status {
            AgentStatus::Operational => status.to_string().green(),
            AgentStatus::Error => status.to_string().red(),
            AgentStatus::Unknown => status.to_string().yellow(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use taskdesk_domain::{RequestType, TaskStatus};

    fn plain() {
        colored::control::set_override(false);
    }

    fn response(success: bool, body: serde_json::Value) -> OrchestratorResponse {
        let target = AgentDirectory::default().route(RequestType::GenerateReport);
        OrchestratorResponse::from_reply(
            RequestType::GenerateReport,
            &target,
            success,
            body,
            "raw".to_string(),
            42,
        )
    }

    #[test]
    fn test_format_response_shows_agent_and_text() {
        plain();
        let text = ConsoleFormatter::format_response(&response(true, json!("Report ready")));
        assert!(text.contains("Weekly Report Agent"));
        assert!(text.contains("ok"));
        assert!(text.contains("42 ms"));
        assert!(text.contains("Report ready"));
    }

    #[test]
    fn test_format_response_failure_shows_raw_text() {
        plain();
        let target = AgentDirectory::default().route(RequestType::ScanTasks);
        let failed =
            OrchestratorResponse::failure(RequestType::ScanTasks, &target, "Connection error: refused", 5);
        let text = ConsoleFormatter::format_response(&failed);
        assert!(text.contains("failed"));
        assert!(text.contains("Connection error: refused"));
    }

    #[test]
    fn test_task_table_lists_rows() {
        plain();
        let tasks = vec![
            Task::new("1", "Security audit", "Vedant").with_company("AWS"),
            Task::new("2", "Docs", "Sarah").with_status(TaskStatus::Completed),
        ];
        let table = ConsoleFormatter::task_table(&tasks);
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("Security audit"));
        assert!(table.contains("Completed"));
    }

    #[test]
    fn test_health_lists_every_sub_agent() {
        plain();
        let text = ConsoleFormatter::format_health(&HealthReport::unreachable());
        assert!(text.contains("Manager: error"));
        assert_eq!(text.matches("unknown").count(), 7);
    }

    #[test]
    fn test_routing_table_mentions_mode() {
        plain();
        let directory = AgentDirectory::default();
        let text = ConsoleFormatter::format_routing_table(&directory, DispatchMode::Direct);
        assert!(text.contains("sync-session"));
        assert!(text.contains("Archive Management Agent"));
        assert!(text.contains("straight to the routed agent"));
    }

    #[test]
    fn test_json_output() {
        let text = ConsoleFormatter::format_json(&response(true, json!({"a": 1})));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["response"]["a"], 1);
        assert_eq!(value["requestType"], "generate-report");
    }
}
