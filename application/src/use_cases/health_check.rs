//! Check Agent Health use case

use crate::ports::agent_gateway::{AgentChatRequest, AgentGateway};
use crate::use_cases::shared::chat_cancellable;
use std::sync::Arc;
use taskdesk_domain::{AgentDirectory, DomainError, HealthReport};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Probe sent to the manager agent
pub const HEALTH_PROBE_MESSAGE: &str = "System health check - verify all agents are operational";

/// Asks the manager whether the agent fleet is up.
///
/// Sub-agents are never contacted; their status is inferred from whether
/// the manager answered.
pub struct CheckAgentHealthUseCase {
    gateway: Arc<dyn AgentGateway>,
    directory: AgentDirectory,
    cancellation_token: Option<CancellationToken>,
}

impl CheckAgentHealthUseCase {
    pub fn new(gateway: Arc<dyn AgentGateway>, directory: AgentDirectory) -> Self {
        Self {
            gateway,
            directory,
            cancellation_token: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub async fn execute(&self) -> Result<HealthReport, DomainError> {
        let request = AgentChatRequest::new(self.directory.manager().clone(), HEALTH_PROBE_MESSAGE);

        match chat_cancellable(self.gateway.as_ref(), &request, &self.cancellation_token).await? {
            Ok(reply) => {
                info!("Manager answered health probe (success: {})", reply.success);
                Ok(HealthReport::from_manager_reply(reply.success))
            }
            Err(e) => {
                warn!("Health probe failed: {}", e);
                Ok(HealthReport::unreachable())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedGateway;
    use serde_json::json;
    use taskdesk_domain::{AgentRole, AgentStatus};

    #[tokio::test]
    async fn test_probe_goes_to_manager_verbatim() {
        let gateway = Arc::new(ScriptedGateway::new().reply(true, json!("all good")));
        let report = CheckAgentHealthUseCase::new(gateway.clone(), AgentDirectory::default())
            .execute()
            .await
            .unwrap();

        let sent = gateway.sent();
        assert_eq!(sent[0].agent_id.as_str(), AgentRole::Manager.default_id());
        assert_eq!(sent[0].message, HEALTH_PROBE_MESSAGE);
        assert_eq!(report.manager_status, AgentStatus::Operational);
        assert!(report.is_healthy());
    }

    #[tokio::test]
    async fn test_unsuccessful_reply_marks_manager_error() {
        let gateway = Arc::new(ScriptedGateway::new().reply(false, json!(null)));
        let report = CheckAgentHealthUseCase::new(gateway, AgentDirectory::default())
            .execute()
            .await
            .unwrap();

        assert_eq!(report.manager_status, AgentStatus::Error);
        assert_eq!(report.sub_agents_status["TASK_UPDATE"], AgentStatus::Operational);
    }

    #[tokio::test]
    async fn test_unreachable_manager() {
        let gateway = Arc::new(ScriptedGateway::new().fail("dns failure"));
        let report = CheckAgentHealthUseCase::new(gateway, AgentDirectory::default())
            .execute()
            .await
            .unwrap();

        assert_eq!(report.manager_status, AgentStatus::Error);
        assert!(report
            .sub_agents_status
            .values()
            .all(|s| *s == AgentStatus::Unknown));
    }

    #[tokio::test]
    async fn test_uses_overridden_manager_id() {
        let gateway = Arc::new(ScriptedGateway::new());
        let directory = AgentDirectory::default().with_override(AgentRole::Manager, "staging-manager");
        CheckAgentHealthUseCase::new(gateway.clone(), directory)
            .execute()
            .await
            .unwrap();
        assert_eq!(gateway.sent()[0].agent_id.as_str(), "staging-manager");
    }
}
