//! Dispatch parameters — how use cases talk to the agents.
//!
//! [`DispatchParams`] groups the static parameters read by
//! [`DispatchRequestUseCase`](crate::use_cases::dispatch::DispatchRequestUseCase)
//! and [`TaskBoardUseCase`](crate::use_cases::task_board::TaskBoardUseCase).

use serde::{Deserialize, Serialize};
use taskdesk_domain::{AgentDirectory, DispatchMode};

/// Default name recorded in update-log entries
pub const DEFAULT_OPERATOR: &str = "taskdesk";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchParams {
    /// Send through the manager or straight to the routed sub-agent
    pub mode: DispatchMode,
    /// Person recorded in update-log entries for local edits
    pub operator: String,
}

impl Default for DispatchParams {
    fn default() -> Self {
        Self {
            mode: DispatchMode::default(),
            operator: DEFAULT_OPERATOR.to_string(),
        }
    }
}

impl DispatchParams {
    // ==================== Builder Methods ====================

    pub fn with_mode(mut self, mode: DispatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }
}

/// Everything a dispatcher needs besides its ports
#[derive(Debug, Clone, Default)]
pub struct DispatchConfig {
    pub params: DispatchParams,
    pub directory: AgentDirectory,
}

impl DispatchConfig {
    pub fn new(params: DispatchParams, directory: AgentDirectory) -> Self {
        Self { params, directory }
    }
}
