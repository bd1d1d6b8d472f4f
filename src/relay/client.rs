use async_openai::types::{self as openai_types};
use axum::http::StatusCode;
use serde_json::Value;
use tracing::{error, info};

use super::error::RelayError;
use super::types::ChatRequest;
use crate::tutor_core::Role;

type Model = openai_types::CreateChatCompletionRequest;
type Message = openai_types::ChatCompletionRequestMessage;
type ModelArgs = openai_types::CreateChatCompletionRequestArgs;
type MessageArgs = openai_types::ChatCompletionRequestMessageArgs;

pub static SYSTEM_PROMPT: &str = "You are a helpful AI tutor. Provide clear, educational responses. Keep responses concise and engaging.";
pub static EMPTY_REPLY: &str = "Sorry, I couldn't generate a response.";

pub const API_VERSION: &str = "2025-01-01-preview";
pub const DEFAULT_ENDPOINT: &str = "https://angilambot-api.openai.azure.com/";
pub const DEFAULT_DEPLOYMENT: &str = "gpt-4o-mini";

const MAX_TOKENS: u16 = 500;
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;

/// Where and how to reach the hosted chat deployment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelaySettings {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub deployment: String,
}

impl Default for RelaySettings {
    fn default() -> Self {
        RelaySettings {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            deployment: DEFAULT_DEPLOYMENT.to_string(),
        }
    }
}

/// Forwards chat requests to Azure OpenAI with the tutor system prompt.
pub struct RelayClient {
    settings: RelaySettings,
    http: reqwest::Client,
}

impl RelayClient {
    pub fn new(settings: RelaySettings) -> RelayClient {
        RelayClient {
            settings,
            http: reqwest::Client::new(),
        }
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.deployment,
            API_VERSION
        )
    }

    /// System prompt first, then the history in order, then the new message.
    pub fn build_model(&self, request: &ChatRequest) -> Result<Model, RelayError> {
        let mut messages: Vec<Message> = Vec::with_capacity(request.history().len() + 2);
        messages.push(
            MessageArgs::default()
                .role(openai_types::Role::System)
                .content(SYSTEM_PROMPT)
                .build()?,
        );
        for turn in request.history() {
            let role = match turn.role {
                Role::User => openai_types::Role::User,
                Role::Assistant => openai_types::Role::Assistant,
            };
            messages.push(
                MessageArgs::default()
                    .role(role)
                    .content(turn.content.as_str())
                    .build()?,
            );
        }
        messages.push(
            MessageArgs::default()
                .role(openai_types::Role::User)
                .content(request.message.as_str())
                .build()?,
        );

        let model = ModelArgs::default()
            .model(self.settings.deployment.as_str())
            .messages(messages)
            .max_tokens(MAX_TOKENS)
            .temperature(TEMPERATURE)
            .top_p(TOP_P)
            .build()?;
        Ok(model)
    }

    /// Sends one request upstream and returns the trimmed reply text.
    pub async fn complete(&self, request: &ChatRequest) -> Result<String, RelayError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(RelayError::MissingApiKey)?;
        let model = self.build_model(request)?;

        info!(
            deployment = %self.settings.deployment,
            history = request.history().len(),
            "forwarding chat request"
        );
        let response = self
            .http
            .post(self.completions_url())
            .header("api-key", api_key)
            .json(&model)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            let details = serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text));
            error!(status = status.as_u16(), %details, "Azure OpenAI API error");
            let status =
                StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            return Err(RelayError::Upstream { status, details });
        }

        let data: Value = response.json().await?;
        let reply = data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .filter(|content| !content.is_empty())
            .unwrap_or(EMPTY_REPLY);
        Ok(reply.to_string())
    }
}
