//! Agent Gateway port
//!
//! Defines the interface for sending a message to a remote agent.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskdesk_domain::AgentId;
use thiserror::Error;

/// Errors that can occur during gateway operations.
///
/// A reply with a non-success status is *not* an error; it comes back as an
/// [`AgentReply`] with `success == false`.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Gateway not configured: {0}")]
    NotConfigured(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// One message for one agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentChatRequest {
    pub agent_id: AgentId,
    pub message: String,
}

impl AgentChatRequest {
    pub fn new(agent_id: AgentId, message: impl Into<String>) -> Self {
        Self {
            agent_id,
            message: message.into(),
        }
    }
}

/// The remote API's answer, passed through untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentReply {
    /// Whether the remote API reported success (HTTP 2xx)
    pub success: bool,
    /// Decoded `response` field, or the whole body when there is none
    pub response: Value,
    /// Response body as received
    pub raw_response: String,
    /// HTTP status code, when the transport has one
    pub status_code: Option<u16>,
}

/// Gateway to the remote agent inference API
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Send a message to an agent and return its reply
    async fn chat(&self, request: &AgentChatRequest) -> Result<AgentReply, GatewayError>;
}
