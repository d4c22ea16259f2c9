//! mistral_chat: a single chat completion against Mistral's OpenAI-compatible API
//!
//! This library provides:
//! - Configuration read from `MISTRAL_API_KEY`, `MISTRAL_MODEL` and `MISTRAL_BASE_URL`
//! - A chat client that sends a fixed system prompt plus one question
//! - `run`, which prints a banner followed by the first answer
//!
//! # Example
//!
//! ```no_run
//! use mistral_chat::{run, ChatConfig};
//!
//! #[tokio::main]
//! async fn main() -> mistral_chat::Result<()> {
//!     let config = ChatConfig::from_env();
//!     run(config, None, &mut std::io::stdout()).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod session;

#[cfg(test)]
mod testing;

pub use config::{
    ChatConfig, API_KEY_ENV, BANNER, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL, DEFAULT_QUESTION, DEFAULT_TEMPERATURE, MODEL_ENV, SYSTEM_PROMPT,
};
pub use error::{ChatError, Result};
pub use model::{ChatClient, MessageBuilder};
pub use session::run;
