//! Dispatch Request use case
//!
//! Sends one [`OrchestratorRequest`] to the remote agents and wraps the
//! answer in an [`OrchestratorResponse`].

use crate::config::DispatchConfig;
use crate::ports::agent_gateway::{AgentChatRequest, AgentGateway};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{DispatchProgress, NoProgress};
use crate::use_cases::shared::chat_cancellable;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use taskdesk_domain::{AgentId, DomainError, OrchestratorRequest, OrchestratorResponse, preview};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Use case for forwarding a request to the agent that handles it
pub struct DispatchRequestUseCase {
    gateway: Arc<dyn AgentGateway>,
    config: DispatchConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl DispatchRequestUseCase {
    pub fn new(gateway: Arc<dyn AgentGateway>, config: DispatchConfig) -> Self {
        Self {
            gateway,
            config,
            conversation_logger: Arc::new(NoConversationLogger),
            cancellation_token: None,
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Execute with default (no-op) progress
    pub async fn execute(
        &self,
        request: OrchestratorRequest,
    ) -> Result<OrchestratorResponse, DomainError> {
        self.execute_with_progress(request, &NoProgress).await
    }

    /// Execute with progress callbacks.
    ///
    /// Only cancellation is an error. A gateway failure comes back as an
    /// unsuccessful response carrying the error text as `raw_response`.
    pub async fn execute_with_progress(
        &self,
        request: OrchestratorRequest,
        progress: &dyn DispatchProgress,
    ) -> Result<OrchestratorResponse, DomainError> {
        let request_type = request.request_type;
        let target = self.config.directory.route(request_type);
        let destination = self.destination(&target.agent_id);

        info!(
            "Dispatching {} to {} via {}",
            request_type,
            target.agent_name(),
            self.config.params.mode
        );

        let chat = AgentChatRequest::new(destination.clone(), request.outbound_message());
        self.conversation_logger.log(ConversationEvent::new(
            "agent_request",
            json!({
                "requestType": request_type,
                "agentId": destination,
                "routedToAgent": target.agent_id,
                "mode": self.config.params.mode,
                "message": chat.message,
            }),
        ));
        progress.on_dispatch_start(request_type, target.agent_name());

        let started = Instant::now();
        let outcome = chat_cancellable(self.gateway.as_ref(), &chat, &self.cancellation_token).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let response = match outcome? {
            Ok(reply) => {
                debug!(
                    "Reply from {} ({} ms, status {:?}): {}",
                    destination,
                    elapsed_ms,
                    reply.status_code,
                    preview(&reply.raw_response, 120)
                );
                self.conversation_logger.log(ConversationEvent::new(
                    "agent_response",
                    json!({
                        "requestType": request_type,
                        "agentId": destination,
                        "success": reply.success,
                        "statusCode": reply.status_code,
                        "executionTime": elapsed_ms,
                        "response": reply.response,
                    }),
                ));
                OrchestratorResponse::from_reply(
                    request_type,
                    &target,
                    reply.success,
                    reply.response,
                    reply.raw_response,
                    elapsed_ms,
                )
            }
            Err(e) => {
                warn!("Dispatch of {} failed: {}", request_type, e);
                self.conversation_logger.log(ConversationEvent::new(
                    "agent_error",
                    json!({
                        "requestType": request_type,
                        "agentId": destination,
                        "error": e.to_string(),
                        "executionTime": elapsed_ms,
                    }),
                ));
                OrchestratorResponse::failure(request_type, &target, e.to_string(), elapsed_ms)
            }
        };

        progress.on_dispatch_complete(request_type, response.success, elapsed_ms);
        Ok(response)
    }

    fn destination(&self, routed: &AgentId) -> AgentId {
        if self.config.params.mode.is_direct() {
            routed.clone()
        } else {
            self.config.directory.manager().clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DispatchParams;
    use crate::use_cases::test_support::ScriptedGateway;
    use serde_json::Value;
    use std::sync::Mutex;
    use taskdesk_domain::{
        AgentDirectory, AgentRole, DispatchMode, RequestTemplate, RequestType,
    };

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, Value)>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        calls: Mutex<Vec<String>>,
    }

    impl DispatchProgress for RecordingProgress {
        fn on_dispatch_start(&self, request_type: RequestType, agent_name: &str) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("start {} {}", request_type, agent_name));
        }

        fn on_dispatch_complete(&self, request_type: RequestType, success: bool, _elapsed_ms: u64) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("done {} {}", request_type, success));
        }
    }

    fn use_case(gateway: Arc<ScriptedGateway>, mode: DispatchMode) -> DispatchRequestUseCase {
        let config = DispatchConfig::new(
            DispatchParams::default().with_mode(mode),
            AgentDirectory::default(),
        );
        DispatchRequestUseCase::new(gateway, config)
    }

    #[tokio::test]
    async fn test_manager_mode_sends_to_manager_and_reports_sub_agent() {
        let gateway = Arc::new(ScriptedGateway::new().reply(true, json!({"summary": "3 tasks"})));
        let response = use_case(gateway.clone(), DispatchMode::ViaManager)
            .execute(RequestTemplate::generate_report(None))
            .await
            .unwrap();

        let sent = gateway.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].agent_id.as_str(), AgentRole::Manager.default_id());
        assert!(sent[0].message.ends_with("\n\nContext: {}"));

        assert!(response.success);
        assert_eq!(response.request_type, RequestType::GenerateReport);
        assert_eq!(
            response.routed_to_agent.as_str(),
            AgentRole::WeeklyReport.default_id()
        );
        assert_eq!(response.agent_name, "Weekly Report Agent");
        assert_eq!(response.response["summary"], "3 tasks");
    }

    #[tokio::test]
    async fn test_direct_mode_sends_to_routed_agent() {
        let gateway = Arc::new(ScriptedGateway::new());
        use_case(gateway.clone(), DispatchMode::Direct)
            .execute(RequestTemplate::scan_tasks())
            .await
            .unwrap();

        assert_eq!(
            gateway.sent()[0].agent_id.as_str(),
            AgentRole::TaskCollection.default_id()
        );
    }

    #[tokio::test]
    async fn test_unsuccessful_reply_is_passed_through() {
        let gateway = Arc::new(ScriptedGateway::new().reply(false, json!("quota exceeded")));
        let response = use_case(gateway, DispatchMode::ViaManager)
            .execute(RequestTemplate::sync_session())
            .await
            .unwrap();

        assert!(!response.success);
        assert_eq!(response.response, json!("quota exceeded"));
        assert!(response.raw_response.contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_gateway_failure_becomes_failed_response() {
        let gateway = Arc::new(ScriptedGateway::new().fail("connection refused"));
        let logger = Arc::new(RecordingLogger::default());
        let progress = RecordingProgress::default();

        let response = use_case(gateway, DispatchMode::ViaManager)
            .with_conversation_logger(logger.clone())
            .execute_with_progress(RequestTemplate::archive_tasks(&["4".to_string()]), &progress)
            .await
            .unwrap();

        assert!(!response.success);
        assert!(response.response.is_null());
        assert!(response.raw_response.contains("connection refused"));
        assert_eq!(response.agent_name, "Archive Management Agent");

        let events = logger.events.lock().unwrap();
        let kinds: Vec<_> = events.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds, vec!["agent_request", "agent_error"]);

        let calls = progress.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                "start archive-tasks Archive Management Agent".to_string(),
                "done archive-tasks false".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_cancelled_before_send() {
        let gateway = Arc::new(ScriptedGateway::new());
        let token = CancellationToken::new();
        token.cancel();

        let result = use_case(gateway.clone(), DispatchMode::ViaManager)
            .with_cancellation(token)
            .execute(RequestTemplate::health_check())
            .await;

        assert!(matches!(result, Err(DomainError::Cancelled)));
        assert!(gateway.sent().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_while_waiting() {
        let gateway = Arc::new(ScriptedGateway::new().hang());
        let token = CancellationToken::new();
        let dispatcher = use_case(gateway, DispatchMode::ViaManager).with_cancellation(token.clone());

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            token.cancel();
        });

        let result = dispatcher.execute(RequestTemplate::scan_tasks()).await;
        canceller.await.unwrap();
        assert!(result.unwrap_err().is_cancelled());
    }
}
