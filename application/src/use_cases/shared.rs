//! Shared utilities for use cases.
//!
//! Cancellation checking and the cancellable gateway call used by the
//! dispatch and health-check use cases.

use crate::ports::agent_gateway::{AgentChatRequest, AgentGateway, AgentReply, GatewayError};
use taskdesk_domain::DomainError;
use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
///
/// Returns `Err(DomainError::Cancelled)` if the token exists and is cancelled.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), DomainError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(DomainError::Cancelled);
    }
    Ok(())
}

/// Call the gateway, aborting when the token fires.
///
/// The outer `Result` is cancellation; the inner one is the gateway outcome.
pub(crate) async fn chat_cancellable(
    gateway: &dyn AgentGateway,
    request: &AgentChatRequest,
    cancellation_token: &Option<CancellationToken>,
) -> Result<Result<AgentReply, GatewayError>, DomainError> {
    check_cancelled(cancellation_token)?;

    match cancellation_token {
        Some(token) => tokio::select! {
            biased;
            _ = token.cancelled() => Err(DomainError::Cancelled),
            result = gateway.chat(request) => Ok(result),
        },
        None => Ok(gateway.chat(request).await),
    }
}
