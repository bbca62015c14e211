//! CLI entrypoint for taskdesk
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use serde_json::json;
use std::io::IsTerminal;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use taskdesk_application::{
    BoardError, CheckAgentHealthUseCase, ConversationLogger, DispatchConfig, DispatchParams,
    DispatchProgress, DispatchRequestUseCase, InMemoryTaskRepository, NoConversationLogger,
    NoProgress, TaskBoardUseCase, TaskRepository,
};
use taskdesk_domain::{DispatchMode, OrchestratorRequest, ReviewFilter, Severity};
use taskdesk_infrastructure::{
    ConfigLoader, FileConfig, JsonTaskRepository, JsonlConversationLogger, LyzrGateway,
    LyzrSettings,
};
use taskdesk_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, ProgressReporter, SimpleProgress,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref())?;
    info!("Starting taskdesk");

    check_config(&config)?;

    let output = OutputConfig::resolve(cli.output, config.output.format, config.output.color, cli.quiet);
    if !output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let (directory, _) = config.agents.to_directory();
    let (mut mode, _) = config.dispatch.parse_mode();
    if cli.direct {
        mode = DispatchMode::Direct;
    }
    let mut params = DispatchParams::default().with_mode(mode);
    if let Some(operator) = &config.dispatch.operator {
        params = params.with_operator(operator);
    }
    let dispatch_config = DispatchConfig::new(params, directory.clone());

    if cli.command == Command::Agents {
        if output.is_json() {
            let table: Vec<_> = directory
                .routing_table()
                .into_iter()
                .map(|(request_type, target)| {
                    json!({
                        "requestType": request_type,
                        "role": target.role,
                        "agentId": target.agent_id,
                        "agentName": target.agent_name(),
                    })
                })
                .collect();
            println!(
                "{}",
                ConsoleFormatter::format_json(&json!({
                    "mode": mode,
                    "manager": directory.manager(),
                    "routes": table,
                }))
            );
        } else {
            print!("{}", ConsoleFormatter::format_routing_table(&directory, mode));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let gateway = Arc::new(LyzrGateway::new(LyzrSettings::from_config(&config.lyzr))?);
    let session_id = gateway.settings().session_id.clone();

    let conversation_logger: Arc<dyn ConversationLogger> = match &config.logging.conversation_log {
        Some(path) => match JsonlConversationLogger::new(path, session_id) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    let repository: Arc<dyn TaskRepository> = if cli.ephemeral {
        Arc::new(InMemoryTaskRepository::default())
    } else {
        let path = config
            .board
            .resolve_path()
            .context("No data directory found; set [board] path in the config")?;
        info!("Board file: {}", path.display());
        Arc::new(JsonTaskRepository::new(path))
    };

    let cancellation = CancellationToken::new();
    {
        let token = cancellation.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, cancelling");
                token.cancel();
            }
        });
    }

    let progress: Box<dyn DispatchProgress> = if !output.show_progress {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let dispatcher = DispatchRequestUseCase::new(gateway.clone(), dispatch_config)
        .with_conversation_logger(conversation_logger)
        .with_cancellation(cancellation.clone());

    let result = match cli.command {
        Command::Health => {
            let report = CheckAgentHealthUseCase::new(gateway, directory)
                .with_cancellation(cancellation)
                .execute()
                .await
                .map_err(BoardError::from);
            report.map(|report| {
                if output.is_json() {
                    println!("{}", ConsoleFormatter::format_json(&report));
                } else {
                    print!("{}", ConsoleFormatter::format_health(&report));
                }
                report.is_healthy()
            })
        }
        Command::Send {
            request_type,
            message,
        } => {
            let request = OrchestratorRequest::new(request_type, message);
            dispatcher
                .execute_with_progress(request, progress.as_ref())
                .await
                .map_err(BoardError::from)
                .map(|response| {
                    if output.is_json() {
                        println!("{}", ConsoleFormatter::format_json(&response));
                    } else {
                        print!("{}", ConsoleFormatter::format_response(&response));
                    }
                    response.success
                })
        }
        command => {
            let board = TaskBoardUseCase::new(dispatcher, repository);
            run_board_command(&board, command, &output, progress.as_ref()).await
        }
    };

    match result {
        Ok(true) => Ok(ExitCode::SUCCESS),
        Ok(false) => Ok(ExitCode::FAILURE),
        Err(e) if e.is_cancelled() => {
            eprintln!("Cancelled");
            Ok(ExitCode::from(130))
        }
        Err(e) => Err(e.into()),
    }
}

/// Run a board command; `Ok(false)` means the agent reported failure.
async fn run_board_command(
    board: &TaskBoardUseCase,
    command: Command,
    output: &OutputConfig,
    progress: &dyn DispatchProgress,
) -> Result<bool, BoardError> {
    let emit = |json: String, text: String| {
        if output.is_json() {
            println!("{}", json);
        } else {
            print!("{}", text);
        }
    };

    match command {
        Command::Dashboard => {
            let view = board.dashboard().await?;
            emit(
                ConsoleFormatter::format_json(&view),
                ConsoleFormatter::format_dashboard(&view),
            );
            Ok(true)
        }
        Command::Sync => {
            let outcome = board.sync_with_progress(progress).await?;
            emit(
                ConsoleFormatter::format_json(&outcome),
                ConsoleFormatter::format_sync(&outcome),
            );
            Ok(outcome.response.success)
        }
        Command::Scan { add, add_all } => {
            let outcome = board.scan_with_progress(progress).await?;
            let selected = match &outcome.result {
                Some(result) if add_all => result.new_tasks.clone(),
                Some(result) if !add.is_empty() => result.select(&add),
                _ => Vec::new(),
            };
            let added = if selected.is_empty() {
                Vec::new()
            } else {
                board.confirm_scan(selected).await?
            };
            emit(
                ConsoleFormatter::format_json(&json!({ "scan": outcome, "added": added })),
                ConsoleFormatter::format_scan(&outcome, &added),
            );
            Ok(outcome.response.success)
        }
        Command::Update {
            id,
            title,
            status,
            assignee,
            company,
            meeting,
            priority,
        } => {
            let current = board.board().await?;
            let mut task = current
                .find(&id)
                .cloned()
                .ok_or_else(|| taskdesk_domain::DomainError::TaskNotFound(id.clone()))?;
            if let Some(title) = title {
                task.title = title;
            }
            if let Some(status) = status {
                task.status = status;
            }
            if let Some(assignee) = assignee {
                task.assigned_to = assignee;
            }
            if let Some(company) = company {
                task.company = Some(company).filter(|c| !c.trim().is_empty());
            }
            if let Some(meeting) = meeting {
                task.meeting = Some(meeting).filter(|m| !m.trim().is_empty());
            }
            if let Some(priority) = priority {
                task.priority = priority;
            }

            let outcome = board.save_task_with_progress(task, progress).await?;
            emit(
                ConsoleFormatter::format_json(&outcome),
                ConsoleFormatter::format_save(&outcome),
            );
            Ok(outcome.response.as_ref().is_none_or(|r| r.success))
        }
        Command::Report { company } => {
            let company = company.as_deref().filter(|c| !c.trim().is_empty());
            let outcome = board
                .report_with_progress(company, progress)
                .await?;
            emit(
                ConsoleFormatter::format_json(&outcome),
                ConsoleFormatter::format_report(&outcome),
            );
            Ok(outcome.response.success)
        }
        Command::Review {
            member,
            company,
            group_by,
        } => {
            let filter = ReviewFilter::new(member, company);
            let outcome = board.review_with_progress(filter, group_by, progress).await?;
            emit(
                ConsoleFormatter::format_json(&outcome),
                ConsoleFormatter::format_review(&outcome),
            );
            Ok(outcome.response.success)
        }
        Command::Agenda { company, date } => {
            let outcome = board.agenda_with_progress(&company, &date, progress).await?;
            emit(
                ConsoleFormatter::format_json(&outcome),
                ConsoleFormatter::format_agenda(&outcome),
            );
            Ok(outcome.response.success)
        }
        Command::Archive { ids } => {
            let outcome = board.archive_with_progress(&ids, progress).await?;
            emit(
                ConsoleFormatter::format_json(&outcome),
                ConsoleFormatter::format_archive(&outcome),
            );
            Ok(outcome.response.success)
        }
        // Handled before the board is built
        Command::Health | Command::Send { .. } | Command::Agents => Ok(true),
    }
}

/// Install the tracing subscriber: stderr always, plus a log file when
/// configured. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8, file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match file {
        Some(path) => {
            let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Log warnings; refuse to start on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in issues.iter().filter(|i| i.severity == Severity::Warning) {
        warn!("{}", issue.message);
    }
    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect();
    if !errors.is_empty() {
        bail!("Invalid configuration:\n  {}", errors.join("\n  "));
    }
    Ok(())
}
