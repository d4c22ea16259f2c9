//! Endpoint, credential and sampling configuration

use std::env;
use std::fmt;

use tracing::warn;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "MISTRAL_API_KEY";
/// Environment variable overriding the model name
pub const MODEL_ENV: &str = "MISTRAL_MODEL";
/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "MISTRAL_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai/v1";
pub const DEFAULT_MODEL: &str = "mistral-tiny";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 300;

/// Configuration for the chat completion call
#[derive(Clone, PartialEq)]
pub struct ChatConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ChatConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(env_value)
    }

    /// Read configuration through `lookup`, treating empty values as unset.
    ///
    /// Sampling parameters are never taken from the environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(base_url) = get(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        if let Some(model) = get(MODEL_ENV) {
            config.model = model;
        }
        config.api_key = get(API_KEY_ENV);

        config
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Values that are not valid Unicode are ignored with a warning
fn env_value(key: &str) -> Option<String> {
    match env::var_os(key)?.into_string() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("{} is set but not valid Unicode, ignoring it", key);
            None
        }
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}
