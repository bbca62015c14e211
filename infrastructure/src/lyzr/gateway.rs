//! Lyzr agent gateway implementation

use super::error::LyzrError;
use super::protocol::{ChatBody, decode_reply};
use crate::config::FileLyzrConfig;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use taskdesk_application::{AgentChatRequest, AgentGateway, AgentReply, GatewayError};
use tracing::{debug, info};

/// Connection settings for [`LyzrGateway`]
#[derive(Debug, Clone)]
pub struct LyzrSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    /// Where the key was expected to come from, for error messages
    pub api_key_source: String,
    pub user_id: String,
    pub session_id: String,
    pub timeout: Duration,
}

impl LyzrSettings {
    /// Settings from the `[lyzr]` section. Without a configured session id
    /// a fresh one is generated, so each run is its own agent session.
    pub fn from_config(config: &FileLyzrConfig) -> Self {
        let user_id = if config.user_id.trim().is_empty() {
            crate::config::DEFAULT_USER_ID.to_string()
        } else {
            config.user_id.clone()
        };
        Self {
            api_url: config.api_url.clone(),
            api_key: config.resolve_api_key(),
            api_key_source: config.api_key_env.clone(),
            user_id,
            session_id: config
                .session_id
                .clone()
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            timeout: Duration::from_secs(config.timeout_seconds.max(1)),
        }
    }
}

/// Agent gateway for the Lyzr inference API.
///
/// One `POST` per message, no retries. Non-2xx replies are returned as
/// unsuccessful [`AgentReply`]s; only transport failures are errors.
pub struct LyzrGateway {
    client: Client,
    settings: LyzrSettings,
}

impl LyzrGateway {
    pub fn new(settings: LyzrSettings) -> Result<Self, LyzrError> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(LyzrError::ClientBuild)?;

        info!(
            "LyzrGateway initialized (url: {}, session: {})",
            settings.api_url, settings.session_id
        );
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &LyzrSettings {
        &self.settings
    }

    async fn post(&self, request: &AgentChatRequest) -> Result<AgentReply, LyzrError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or_else(|| LyzrError::MissingApiKey(self.settings.api_key_source.clone()))?;

        let body = ChatBody {
            user_id: &self.settings.user_id,
            agent_id: request.agent_id.as_str(),
            session_id: &self.settings.session_id,
            message: &request.message,
        };

        debug!("POST {} (agent {})", self.settings.api_url, request.agent_id);
        let url = self.settings.api_url.as_str();
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("x-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LyzrError::from_transport(url, e))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LyzrError::from_transport(url, e))?;
        debug!("Lyzr replied {} ({} bytes)", status, text.len());

        Ok(decode_reply(status, text))
    }
}

#[async_trait]
impl AgentGateway for LyzrGateway {
    async fn chat(&self, request: &AgentChatRequest) -> Result<AgentReply, GatewayError> {
        Ok(self.post(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_generate_session_id() {
        let config = FileLyzrConfig::default();
        let a = LyzrSettings::from_config(&config);
        let b = LyzrSettings::from_config(&config);
        assert_ne!(a.session_id, b.session_id);
        assert_eq!(a.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_settings_keep_configured_session() {
        let config = FileLyzrConfig {
            session_id: Some("weekly-review".to_string()),
            user_id: String::new(),
            ..Default::default()
        };
        let settings = LyzrSettings::from_config(&config);
        assert_eq!(settings.session_id, "weekly-review");
        assert_eq!(settings.user_id, crate::config::DEFAULT_USER_ID);
    }
}
