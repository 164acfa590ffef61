//! Text-completion service boundary.
//!
//! The debate core never talks to a model directly — it holds a
//! [`CompletionService`] built once at startup and injected into the round
//! engine. Any failure at this boundary means "no usable text produced this
//! attempt"; the engine decides whether to retry (Author) or shrug
//! (Reviewer). The only concrete backend is an OpenAI-compatible
//! chat-completions endpoint, which is what local llama.cpp-style servers
//! expose.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Endpoint;

/// Failure to produce a completion.
#[derive(Debug, Clone, Error)]
pub enum CompletionError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("completion request failed: {0}")]
    Http(String),
    /// The backend answered with a non-success status.
    #[error("completion backend error ({status}): {body}")]
    Backend { status: u16, body: String },
    /// The backend answered 2xx but returned no choices.
    #[error("completion backend returned no choices")]
    NoChoices,
}

/// Opaque text-completion service: one prompt in, one generated string out.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat-completions backend.
pub struct OpenAiCompatService {
    http: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
    temperature: f32,
}

impl OpenAiCompatService {
    /// Build a service for the given endpoint with a hard request timeout.
    pub fn new(endpoint: &Endpoint, temperature: f32, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: format!("{}/chat/completions", endpoint.url.trim_end_matches('/')),
            model: endpoint.model.clone(),
            api_key: endpoint.api_key.clone(),
            temperature,
        })
    }
}

#[async_trait]
impl CompletionService for OpenAiCompatService {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
            max_tokens,
            temperature: self.temperature,
        };

        let mut builder = self.http.post(&self.url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| CompletionError::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Backend { status, body });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Http(e.to_string()))?;

        let content = chat
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or(CompletionError::NoChoices)?;

        debug!(model = %self.model, chars = content.len(), "completion received");
        Ok(content.trim().to_string())
    }
}

/// Check whether an inference endpoint is reachable (GET `{url}/models`).
pub async fn check_endpoint(url: &str) -> bool {
    let models_url = format!("{}/models", url.trim_end_matches('/'));
    match reqwest::Client::new()
        .get(&models_url)
        .timeout(Duration::from_secs(5))
        .send()
        .await
    {
        Ok(resp) => resp.status().is_success(),
        Err(_) => false,
    }
}
