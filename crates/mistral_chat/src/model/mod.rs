//! Model client module
//!
//! This module provides:
//! - `client`: OpenAI-compatible chat client pointed at Mistral

mod client;

pub use client::{ChatClient, MessageBuilder};
