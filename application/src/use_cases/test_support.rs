//! Scripted gateway shared by the use case tests.

use crate::ports::agent_gateway::{AgentChatRequest, AgentGateway, AgentReply, GatewayError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

pub(crate) enum Scripted {
    Reply(AgentReply),
    Fail(String),
    Hang,
}

/// Gateway that records every request and answers from a script.
///
/// Once the script runs out it keeps answering with a successful empty reply.
#[derive(Default)]
pub(crate) struct ScriptedGateway {
    script: Mutex<VecDeque<Scripted>>,
    pub(crate) requests: Mutex<Vec<AgentChatRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, success: bool, response: Value) -> Self {
        let raw_response = serde_json::json!({ "response": response }).to_string();
        self.push(Scripted::Reply(AgentReply {
            success,
            response,
            raw_response,
            status_code: Some(if success { 200 } else { 500 }),
        }))
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.push(Scripted::Fail(message.to_string()))
    }

    pub(crate) fn hang(self) -> Self {
        self.push(Scripted::Hang)
    }

    fn push(self, step: Scripted) -> Self {
        self.script.lock().unwrap().push_back(step);
        self
    }

    pub(crate) fn sent(&self) -> Vec<AgentChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentGateway for ScriptedGateway {
    async fn chat(&self, request: &AgentChatRequest) -> Result<AgentReply, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        let step = self.script.lock().unwrap().pop_front();
        match step {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Fail(message)) => Err(GatewayError::ConnectionError(message)),
            Some(Scripted::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(GatewayError::Timeout)
            }
            None => Ok(AgentReply {
                success: true,
                response: Value::Null,
                raw_response: "{}".to_string(),
                status_code: Some(200),
            }),
        }
    }
}
