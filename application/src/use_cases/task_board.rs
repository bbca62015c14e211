//! Task Board use case
//!
//! Dashboard actions: each one loads the board, applies the local change
//! (if any), persists it and forwards the matching request to the agents.

use crate::ports::progress::{DispatchProgress, NoProgress};
use crate::ports::task_repository::{RepositoryError, TaskRepository};
use crate::use_cases::dispatch::DispatchRequestUseCase;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;
use taskdesk_domain::{
    DashboardStats, DomainError, GroupBy, OrchestratorResponse, RequestTemplate, ReviewFilter,
    ScanResult, Task, TaskBoard, TaskChanges, TaskGroup, WeeklyReport, decode_task_list,
    group_tasks,
};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum BoardError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Board storage error: {0}")]
    Repository(#[from] RepositoryError),
}

impl BoardError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, BoardError::Domain(e) if e.is_cancelled())
    }
}

/// Everything the dashboard header and task table show
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub stats: DashboardStats,
    pub tasks: Vec<Task>,
    pub sync_status: String,
    pub archivable: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncOutcome {
    pub response: OrchestratorResponse,
    /// Number of tasks loaded from the reply, when it carried a task list
    pub refreshed: Option<usize>,
    pub sync_status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    pub task: Task,
    pub changes: Vec<String>,
    /// `None` when nothing changed and no request was sent
    pub response: Option<OrchestratorResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutcome {
    pub response: OrchestratorResponse,
    /// Decoded scan result, when the reply contained one
    pub result: Option<ScanResult>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveOutcome {
    pub archived: usize,
    pub response: OrchestratorResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportOutcome {
    pub report: WeeklyReport,
    pub response: OrchestratorResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcome {
    pub group_by: GroupBy,
    pub groups: Vec<TaskGroup>,
    pub response: OrchestratorResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaOutcome {
    pub company: String,
    pub meeting_date: String,
    /// Unfinished tasks for the company
    pub open_tasks: Vec<Task>,
    pub response: OrchestratorResponse,
}

pub struct TaskBoardUseCase {
    dispatcher: DispatchRequestUseCase,
    repository: Arc<dyn TaskRepository>,
}

impl TaskBoardUseCase {
    pub fn new(dispatcher: DispatchRequestUseCase, repository: Arc<dyn TaskRepository>) -> Self {
        Self {
            dispatcher,
            repository,
        }
    }

    fn operator(&self) -> &str {
        &self.dispatcher.config().params.operator
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    pub async fn board(&self) -> Result<TaskBoard, BoardError> {
        Ok(self.repository.load().await?)
    }

    pub async fn dashboard(&self) -> Result<DashboardView, BoardError> {
        let board = self.repository.load().await?;
        Ok(DashboardView {
            stats: board.stats(Self::today()),
            tasks: board.visible().into_iter().cloned().collect(),
            sync_status: board.sync_status(Utc::now()),
            archivable: board.archivable().len(),
        })
    }

    pub async fn sync(&self) -> Result<SyncOutcome, BoardError> {
        self.sync_with_progress(&NoProgress).await
    }

    /// Fetch the remote task state and record the sync on the board.
    ///
    /// The board is replaced only when the reply decodes to a task list.
    pub async fn sync_with_progress(
        &self,
        progress: &dyn DispatchProgress,
    ) -> Result<SyncOutcome, BoardError> {
        let response = self
            .dispatcher
            .execute_with_progress(RequestTemplate::sync_session(), progress)
            .await?;

        let mut board = self.repository.load().await?;
        let refreshed = if response.success {
            decode_task_list(&response.response).map(|tasks| {
                let count = tasks.len();
                board.replace_all(tasks);
                count
            })
        } else {
            None
        };
        match refreshed {
            Some(count) => info!("Sync refreshed board with {} tasks", count),
            None => debug!("Sync reply carried no task list"),
        }

        let now = Utc::now();
        board.record_sync(response.success, now);
        self.repository.save(&board).await?;

        Ok(SyncOutcome {
            response,
            refreshed,
            sync_status: board.sync_status(now),
        })
    }

    pub async fn save_task(&self, task: Task) -> Result<SaveOutcome, BoardError> {
        self.save_task_with_progress(task, &NoProgress).await
    }

    /// Replace a task locally, then forward the field changes.
    pub async fn save_task_with_progress(
        &self,
        task: Task,
        progress: &dyn DispatchProgress,
    ) -> Result<SaveOutcome, BoardError> {
        let mut board = self.repository.load().await?;
        let task_id = task.id.clone();
        let changes: TaskChanges = board.replace(task, self.operator(), Utc::now())?;

        if changes.is_empty() {
            debug!("Task {} unchanged, nothing to send", task_id);
            return Ok(SaveOutcome {
                task: board.find(&task_id).cloned().ok_or(DomainError::TaskNotFound(task_id))?,
                changes: Vec::new(),
                response: None,
            });
        }

        self.repository.save(&board).await?;
        info!("Task {} updated: {}", task_id, changes.describe());

        let response = self
            .dispatcher
            .execute_with_progress(
                RequestTemplate::update_task(&task_id, changes.to_json()),
                progress,
            )
            .await?;

        let task = board
            .find(&task_id)
            .cloned()
            .ok_or_else(|| DomainError::TaskNotFound(task_id.clone()))?;
        Ok(SaveOutcome {
            task,
            changes: changes.changes.iter().map(|c| c.label.to_string()).collect(),
            response: Some(response),
        })
    }

    pub async fn scan(&self) -> Result<ScanOutcome, BoardError> {
        self.scan_with_progress(&NoProgress).await
    }

    pub async fn scan_with_progress(
        &self,
        progress: &dyn DispatchProgress,
    ) -> Result<ScanOutcome, BoardError> {
        let response = self
            .dispatcher
            .execute_with_progress(RequestTemplate::scan_tasks(), progress)
            .await?;
        let result = if response.success {
            ScanResult::from_agent_response(&response.response)
        } else {
            None
        };
        if let Some(result) = &result {
            info!("{}", result.summary());
        }
        Ok(ScanOutcome { response, result })
    }

    /// Add confirmed scan tasks to the board. Returns the ids added.
    pub async fn confirm_scan(&self, tasks: Vec<Task>) -> Result<Vec<String>, BoardError> {
        if tasks.is_empty() {
            return Err(DomainError::EmptySelection.into());
        }
        let mut board = self.repository.load().await?;
        let added = board.add_new(tasks);
        if !added.is_empty() {
            self.repository.save(&board).await?;
        }
        info!("Added {} scanned tasks", added.len());
        Ok(added)
    }

    pub async fn archive(&self, ids: &[String]) -> Result<ArchiveOutcome, BoardError> {
        self.archive_with_progress(ids, &NoProgress).await
    }

    /// Archive completed tasks; fails without changes if any id is not
    /// completed. Repeated ids count once.
    pub async fn archive_with_progress(
        &self,
        ids: &[String],
        progress: &dyn DispatchProgress,
    ) -> Result<ArchiveOutcome, BoardError> {
        let mut unique: Vec<String> = Vec::with_capacity(ids.len());
        for id in ids {
            if !unique.contains(id) {
                unique.push(id.clone());
            }
        }

        let mut board = self.repository.load().await?;
        let archived = board.archive(&unique, self.operator(), Utc::now())?;
        self.repository.save(&board).await?;

        let response = self
            .dispatcher
            .execute_with_progress(RequestTemplate::archive_tasks(&unique), progress)
            .await?;
        Ok(ArchiveOutcome { archived, response })
    }

    pub async fn report(&self, company: Option<&str>) -> Result<ReportOutcome, BoardError> {
        self.report_with_progress(company, &NoProgress).await
    }

    pub async fn report_with_progress(
        &self,
        company: Option<&str>,
        progress: &dyn DispatchProgress,
    ) -> Result<ReportOutcome, BoardError> {
        let board = self.repository.load().await?;
        let report = WeeklyReport::compute(board.tasks(), company, Self::today());
        let response = self
            .dispatcher
            .execute_with_progress(RequestTemplate::generate_report(company), progress)
            .await?;
        Ok(ReportOutcome { report, response })
    }

    pub async fn review(
        &self,
        filter: ReviewFilter,
        group_by: GroupBy,
    ) -> Result<ReviewOutcome, BoardError> {
        self.review_with_progress(filter, group_by, &NoProgress).await
    }

    pub async fn review_with_progress(
        &self,
        filter: ReviewFilter,
        group_by: GroupBy,
        progress: &dyn DispatchProgress,
    ) -> Result<ReviewOutcome, BoardError> {
        let board = self.repository.load().await?;
        let visible: Vec<Task> = board.visible().into_iter().cloned().collect();
        let groups = group_tasks(filter.apply(&visible), group_by);
        let request = RequestTemplate::start_review_meeting(
            filter.team_member.as_deref(),
            filter.company.as_deref(),
        );
        let response = self.dispatcher.execute_with_progress(request, progress).await?;
        Ok(ReviewOutcome {
            group_by,
            groups,
            response,
        })
    }

    pub async fn agenda(
        &self,
        company: &str,
        meeting_date: &str,
    ) -> Result<AgendaOutcome, BoardError> {
        self.agenda_with_progress(company, meeting_date, &NoProgress)
            .await
    }

    pub async fn agenda_with_progress(
        &self,
        company: &str,
        meeting_date: &str,
        progress: &dyn DispatchProgress,
    ) -> Result<AgendaOutcome, BoardError> {
        let board = self.repository.load().await?;
        let open_tasks = board
            .visible()
            .into_iter()
            .filter(|t| !t.is_completed() && t.matches_company(Some(company)))
            .cloned()
            .collect();
        let response = self
            .dispatcher
            .execute_with_progress(
                RequestTemplate::generate_agenda(company, meeting_date),
                progress,
            )
            .await?;
        Ok(AgendaOutcome {
            company: company.to_string(),
            meeting_date: meeting_date.to_string(),
            open_tasks,
            response,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DispatchConfig, DispatchParams};
    use crate::ports::task_repository::InMemoryTaskRepository;
    use crate::use_cases::test_support::ScriptedGateway;
    use serde_json::json;
    use taskdesk_domain::{AgentDirectory, RequestType, TaskStatus};

    fn seed() -> TaskBoard {
        TaskBoard::new(vec![
            Task::new("1", "Security audit", "Vedant")
                .with_status(TaskStatus::InProgress)
                .with_company("AWS"),
            Task::new("2", "Write docs", "Sarah")
                .with_status(TaskStatus::Completed)
                .with_company("Nvidia"),
            Task::new("3", "Pricing sheet", "Rob").with_company("AWS"),
        ])
    }

    fn setup(gateway: ScriptedGateway) -> (TaskBoardUseCase, Arc<ScriptedGateway>, Arc<InMemoryTaskRepository>) {
        let gateway = Arc::new(gateway);
        let repository = Arc::new(InMemoryTaskRepository::new(seed()));
        let config = DispatchConfig::new(
            DispatchParams::default().with_operator("Rob"),
            AgentDirectory::default(),
        );
        let dispatcher = DispatchRequestUseCase::new(gateway.clone(), config);
        (
            TaskBoardUseCase::new(dispatcher, repository.clone()),
            gateway,
            repository,
        )
    }

    #[tokio::test]
    async fn test_dashboard_hides_archived() {
        let (use_case, _, repository) = setup(ScriptedGateway::new());
        let mut board = seed();
        board.archive(&["2".to_string()], "Rob", Utc::now()).unwrap();
        repository.save(&board).await.unwrap();

        let view = use_case.dashboard().await.unwrap();
        assert_eq!(view.tasks.len(), 2);
        assert_eq!(view.stats.total, 3);
        assert_eq!(view.archivable, 0);
        assert_eq!(view.sync_status, "Never synced");
    }

    #[tokio::test]
    async fn test_sync_replaces_board_when_reply_has_tasks() {
        let reply = json!({"tasks": [{"id": "9", "title": "Renewal", "assignedTo": "Sarah"}]});
        let (use_case, _, repository) = setup(ScriptedGateway::new().reply(true, reply));

        let outcome = use_case.sync().await.unwrap();
        assert_eq!(outcome.refreshed, Some(1));
        assert_eq!(outcome.sync_status, "Synced just now");

        let board = repository.snapshot().await;
        assert_eq!(board.tasks().len(), 1);
        assert_eq!(board.tasks()[0].id, "9");
    }

    #[tokio::test]
    async fn test_sync_keeps_board_on_prose_reply() {
        let (use_case, _, repository) =
            setup(ScriptedGateway::new().reply(true, json!("Synced 3 tasks from Notion")));

        let outcome = use_case.sync().await.unwrap();
        assert_eq!(outcome.refreshed, None);
        assert_eq!(repository.snapshot().await.tasks().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_sync_is_recorded() {
        let (use_case, _, repository) = setup(ScriptedGateway::new().fail("timeout"));

        let outcome = use_case.sync().await.unwrap();
        assert!(!outcome.response.success);
        assert_eq!(outcome.sync_status, "Sync failed");
        assert_eq!(repository.snapshot().await.tasks().len(), 3);
    }

    #[tokio::test]
    async fn test_save_task_logs_and_forwards_changes() {
        let (use_case, gateway, repository) = setup(ScriptedGateway::new());
        let mut task = seed().find("3").cloned().unwrap();
        task.status = TaskStatus::InProgress;

        let outcome = use_case.save_task(task).await.unwrap();
        assert_eq!(outcome.changes, vec!["Status".to_string()]);
        let response = outcome.response.unwrap();
        assert_eq!(response.request_type, RequestType::UpdateTask);

        let sent = gateway.sent();
        assert!(sent[0].message.starts_with("Update task 3 with changes:"));

        let board = repository.snapshot().await;
        let saved = board.find("3").unwrap();
        assert_eq!(saved.status, TaskStatus::InProgress);
        assert_eq!(saved.update_log.len(), 1);
        assert_eq!(saved.update_log[0].person, "Rob");
    }

    #[tokio::test]
    async fn test_save_unchanged_task_sends_nothing() {
        let (use_case, gateway, _) = setup(ScriptedGateway::new());
        let task = seed().find("1").cloned().unwrap();

        let outcome = use_case.save_task(task).await.unwrap();
        assert!(outcome.response.is_none());
        assert!(gateway.sent().is_empty());
    }

    #[tokio::test]
    async fn test_save_unknown_task_fails() {
        let (use_case, gateway, _) = setup(ScriptedGateway::new());
        let result = use_case.save_task(Task::new("42", "ghost", "Rob")).await;
        assert!(matches!(
            result,
            Err(BoardError::Domain(DomainError::TaskNotFound(_)))
        ));
        assert!(gateway.sent().is_empty());
    }

    #[tokio::test]
    async fn test_scan_then_confirm_skips_existing_ids() {
        let reply = json!({
            "newTasks": [
                {"id": "1", "title": "Security audit", "assignedTo": "Vedant"},
                {"id": "7", "title": "Send NDA", "assignedTo": "Sarah", "company": "Google Cloud"}
            ],
            "duplicates": [{"title": "Security audit", "person": "Vedant"}]
        });
        let (use_case, _, repository) = setup(ScriptedGateway::new().reply(true, reply));

        let outcome = use_case.scan().await.unwrap();
        let result = outcome.result.unwrap();
        assert_eq!(result.new_tasks.len(), 2);
        assert_eq!(result.duplicates.len(), 1);

        let added = use_case.confirm_scan(result.new_tasks).await.unwrap();
        assert_eq!(added, vec!["7".to_string()]);
        assert_eq!(repository.snapshot().await.tasks().len(), 4);
    }

    #[tokio::test]
    async fn test_confirm_empty_selection_is_error() {
        let (use_case, _, _) = setup(ScriptedGateway::new());
        let result = use_case.confirm_scan(Vec::new()).await;
        assert!(matches!(
            result,
            Err(BoardError::Domain(DomainError::EmptySelection))
        ));
    }

    #[tokio::test]
    async fn test_archive_completed_task() {
        let (use_case, gateway, repository) = setup(ScriptedGateway::new());
        let outcome = use_case.archive(&["2".to_string()]).await.unwrap();

        assert_eq!(outcome.archived, 1);
        assert_eq!(
            repository.snapshot().await.find("2").unwrap().status,
            TaskStatus::Archived
        );
        assert_eq!(
            gateway.sent()[0].message.lines().next().unwrap(),
            "Archive 1 completed tasks and log archival actions"
        );
    }

    #[tokio::test]
    async fn test_archive_counts_repeated_ids_once() {
        let (use_case, gateway, _) = setup(ScriptedGateway::new());
        let outcome = use_case
            .archive(&["2".to_string(), "2".to_string()])
            .await
            .unwrap();

        assert_eq!(outcome.archived, 1);
        let sent = gateway.sent();
        let mut lines = sent[0].message.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Archive 1 completed tasks and log archival actions"
        );
        assert!(sent[0].message.ends_with("Context: {\"taskIds\":[\"2\"]}"));
    }

    #[tokio::test]
    async fn test_archive_rejects_open_task_without_sending() {
        let (use_case, gateway, repository) = setup(ScriptedGateway::new());
        let result = use_case
            .archive(&["2".to_string(), "3".to_string()])
            .await;

        assert!(matches!(
            result,
            Err(BoardError::Domain(DomainError::NotArchivable(_)))
        ));
        assert!(gateway.sent().is_empty());
        assert_eq!(
            repository.snapshot().await.find("2").unwrap().status,
            TaskStatus::Completed
        );
    }

    #[tokio::test]
    async fn test_review_groups_unfinished_tasks() {
        let (use_case, _, _) = setup(ScriptedGateway::new());
        let filter = ReviewFilter::new(None, Some("AWS".to_string()));

        let outcome = use_case.review(filter, GroupBy::TeamMember).await.unwrap();
        let names: Vec<_> = outcome.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Vedant", "Rob"]);
        assert_eq!(outcome.response.request_type, RequestType::ReviewMeeting);
    }

    #[tokio::test]
    async fn test_report_is_restricted_to_company() {
        let (use_case, _, _) = setup(ScriptedGateway::new());
        let outcome = use_case.report(Some("Nvidia")).await.unwrap();
        assert_eq!(outcome.report.total_tasks, 1);
        assert_eq!(outcome.report.completed_this_week, 1);
    }

    #[tokio::test]
    async fn test_agenda_lists_open_company_tasks() {
        let (use_case, gateway, _) = setup(ScriptedGateway::new());
        let outcome = use_case.agenda("AWS", "2024-12-05").await.unwrap();

        let ids: Vec<_> = outcome.open_tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(gateway.sent()[0]
            .message
            .starts_with("Generate meeting agenda for AWS on 2024-12-05"));
    }
}
