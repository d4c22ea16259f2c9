/// Error types for chat completion calls
use async_openai::error::OpenAIError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Chat completion request failed: {0}")]
    OpenAI(#[from] OpenAIError),

    #[error("Response contained no choices")]
    EmptyResponse,

    #[error("First choice carried no message content")]
    MissingContent,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChatError>;
