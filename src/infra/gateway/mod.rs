//! OpenAI-compatible chat-completions client for the optimization gateway.

pub mod reply;

use crate::application::optimize::CodeOptimizer;
use crate::domain::{OptimizationRequest, OptimizationResult, OptimizeError};
use crate::infra::app_config::AppConfig;
use crate::prompts::optimize_prompt;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct GatewayClient {
    base_url: String,
    api_key: String,
    model: String,
    http_client: Client,
}

impl GatewayClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, OptimizeError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OptimizeError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
            http_client,
        })
    }

    /// Build a client from config; the API key comes from the configured env var.
    pub fn from_config(config: &AppConfig) -> Result<Self, OptimizeError> {
        let api_key = config.api_key().ok_or_else(|| {
            log::error!("{} is not configured", config.api_key_env);
            OptimizeError::NotConfigured(format!("{} is not set", config.api_key_env))
        })?;

        Self::new(
            config.gateway_url.clone(),
            api_key,
            config.model.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, OptimizeError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| OptimizeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("AI gateway error: {} {}", status, body);
            return Err(map_status(status, body));
        }

        let reply: ChatResponse = response
            .json()
            .await
            .map_err(|e| OptimizeError::InvalidReply(e.to_string()))?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| OptimizeError::InvalidReply("reply has no message content".into()))
    }
}

fn map_status(status: StatusCode, body: String) -> OptimizeError {
    match status {
        StatusCode::TOO_MANY_REQUESTS => OptimizeError::RateLimited,
        StatusCode::PAYMENT_REQUIRED => OptimizeError::CreditsExhausted,
        _ => OptimizeError::Gateway {
            status: status.as_u16(),
            body,
        },
    }
}

#[async_trait]
impl CodeOptimizer for GatewayClient {
    async fn optimize(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationResult, OptimizeError> {
        log::info!("Optimizing {} code...", request.language);

        let prompt = optimize_prompt(request)?;
        let content = self
            .complete(vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system,
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.user,
                },
            ])
            .await?;

        log::debug!("AI response: {content}");
        reply::parse_reply(&content)
    }
}
