//! Chat client for Mistral's OpenAI-compatible API

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
    Client,
};
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::{ChatConfig, SYSTEM_PROMPT};
use crate::error::{ChatError, Result};

/// Client performing a single chat completion round trip
pub struct ChatClient {
    config: ChatConfig,
    client: Client<OpenAIConfig>,
}

impl ChatClient {
    /// Create a new ChatClient
    ///
    /// A missing key is sent as an empty bearer token; the service decides.
    /// Requests are sent exactly once, rate-limit replies included.
    pub fn new(config: ChatConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(&config.base_url)
            .with_api_key(config.api_key.as_deref().unwrap_or_default());

        let client = Client::with_config(openai_config).with_backoff(no_retry());

        Self { config, client }
    }

    /// Build the request: the fixed system prompt followed by `question`
    #[allow(deprecated)]
    pub fn build_request(&self, question: &str) -> Result<CreateChatCompletionRequest> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.config.model)
            .messages(vec![
                MessageBuilder::system(SYSTEM_PROMPT)?,
                MessageBuilder::user(question)?,
            ])
            .temperature(self.config.temperature)
            .max_tokens(self.config.max_tokens)
            .build()?;

        Ok(request)
    }

    /// Send `request` once and return the first choice's content
    pub async fn complete(&self, request: CreateChatCompletionRequest) -> Result<String> {
        debug!(
            "Sending chat completion to {} (model: {}, messages: {})",
            self.config.base_url,
            request.model,
            request.messages.len()
        );

        let response = self.client.chat().create(request).await?;

        info!(
            "Received {} choice(s) from model {}",
            response.choices.len(),
            response.model
        );

        first_choice_content(response)
    }
}

/// Backoff policy that gives up on the first transient failure
fn no_retry() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

fn first_choice_content(response: CreateChatCompletionResponse) -> Result<String> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(ChatError::EmptyResponse)?;

    choice.message.content.ok_or(ChatError::MissingContent)
}

/// Helper for building conversation messages
pub struct MessageBuilder;

impl MessageBuilder {
    /// Create a system message
    pub fn system(content: &str) -> Result<ChatCompletionRequestMessage> {
        Ok(ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into())
    }

    /// Create a user message
    pub fn user(content: &str) -> Result<ChatCompletionRequestMessage> {
        Ok(ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into())
    }
}
