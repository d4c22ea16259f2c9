//! Configuration module for mistral_chat
//!
//! This module contains:
//! - `settings`: Endpoint, credential and sampling configuration
//! - `prompts`: Fixed system prompt, default question and banner

mod prompts;
mod settings;

pub use prompts::{BANNER, DEFAULT_QUESTION, SYSTEM_PROMPT};
pub use settings::{
    ChatConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE, MODEL_ENV,
};
