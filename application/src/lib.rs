//! Application layer for taskdesk
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_OPERATOR, DispatchConfig, DispatchParams};
pub use ports::{
    agent_gateway::{AgentChatRequest, AgentGateway, AgentReply, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{DispatchProgress, NoProgress},
    task_repository::{InMemoryTaskRepository, RepositoryError, TaskRepository},
};
pub use use_cases::dispatch::DispatchRequestUseCase;
pub use use_cases::health_check::{CheckAgentHealthUseCase, HEALTH_PROBE_MESSAGE};
pub use use_cases::task_board::{
    AgendaOutcome, ArchiveOutcome, BoardError, DashboardView, ReportOutcome, ReviewOutcome,
    SaveOutcome, ScanOutcome, SyncOutcome, TaskBoardUseCase,
};
