//! Text generation through a hosted chat-completion API
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Move request timeouts into `TimeoutGenerator`
//! - 1.0.0: Initial release with OpenAI-compatible client (OpenAI, Groq, local gateways)

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};
use openai::Credentials;
use std::sync::Arc;
use std::time::Duration;

use crate::core::Config;

/// Role tag for a message sent to the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One role-tagged message in a generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

/// Turns an ordered list of role-tagged messages into the next generated text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// Chat-completion client for OpenAI-compatible endpoints
#[derive(Clone)]
pub struct OpenAiGenerator {
    credentials: Credentials,
    model: String,
    temperature: Option<f32>,
}

impl OpenAiGenerator {
    pub fn new(api_key: &str, base_url: &str, model: &str) -> Self {
        Self {
            credentials: Credentials::new(api_key, base_url),
            model: model.to_string(),
            temperature: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut generator = Self::new(&config.api_key, &config.base_url, &config.model);
        generator.temperature = config.temperature;
        generator
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, messages: Vec<ChatCompletionMessage>) -> Result<String> {
        let mut builder = ChatCompletion::builder(&self.model, messages)
            .credentials(self.credentials.clone());
        if let Some(temperature) = self.temperature {
            builder = builder.temperature(temperature);
        }

        let chat_completion = builder
            .create()
            .await
            .map_err(|e| anyhow!("OpenAI API error: {}", e))?;

        if let Some(usage) = &chat_completion.usage {
            debug!(
                "Completion usage ({}): prompt={} completion={} total={}",
                self.model, usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        chat_completion
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .ok_or_else(|| anyhow!("No response from OpenAI"))
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        let request: Vec<ChatCompletionMessage> = messages.iter().map(to_openai_message).collect();
        self.complete(request).await
    }
}

/// Bounds every call of the wrapped generator by a fixed deadline
pub struct TimeoutGenerator {
    inner: Arc<dyn TextGenerator>,
    limit: Duration,
}

impl TimeoutGenerator {
    pub fn new(inner: Arc<dyn TextGenerator>, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

#[async_trait]
impl TextGenerator for TimeoutGenerator {
    async fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        tokio::time::timeout(self.limit, self.inner.generate(messages))
            .await
            .map_err(|_| anyhow!("generation timed out after {:?}", self.limit))?
    }
}

/// The configured chat client, wrapped in a deadline when one is set
pub fn generator_from_config(config: &Config) -> Arc<dyn TextGenerator> {
    let client: Arc<dyn TextGenerator> = Arc::new(OpenAiGenerator::from_config(config));
    match config.request_timeout {
        Some(limit) => Arc::new(TimeoutGenerator::new(client, limit)),
        None => client,
    }
}

fn to_openai_message(message: &ChatMessage) -> ChatCompletionMessage {
    let role = match message.role {
        ChatRole::System => ChatCompletionMessageRole::System,
        ChatRole::User => ChatCompletionMessageRole::User,
        ChatRole::Assistant => ChatCompletionMessageRole::Assistant,
    };
    ChatCompletionMessage {
        role,
        content: Some(message.content.clone()),
        name: None,
        function_call: None,
        tool_call_id: None,
        tool_calls: None,
    }
}
