//! Fixed parameters of the loop and credential loading.
//!
//! The loop is deliberately parameter-free: model, file names, and endpoint
//! are constants, and the only external input is the API key taken from the
//! environment. There is no config file.

use std::env;
use std::time::Duration;

use anyhow::{Result, anyhow};

/// Environment variable holding the API credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Model identifier sent with every chat-completion request.
pub const MODEL: &str = "gpt-4o-mini";
/// File the generated rewrite is written to (full overwrite each run).
pub const OUTPUT_FILE: &str = "improved_code.txt";
/// Append-only run journal.
pub const JOURNAL_FILE: &str = "self_improvement_log.txt";
/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Connection parameters for the chat-completion API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, without the `/v1/chat/completions` suffix.
    pub base_url: String,
    /// Bearer token for the `Authorization` header.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Per-request wall-clock limit.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Build a config with the fixed defaults and the given key.
    pub fn new(api_key: String) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            model: MODEL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Load the credential from the environment.
    ///
    /// A missing or blank key is a hard startup failure; nothing else in the
    /// run may happen first.
    pub fn from_env() -> Result<Self> {
        Self::from_key(env::var(API_KEY_VAR).ok())
    }

    /// Build a config from an optional key value (the testable core of
    /// [`from_env`](Self::from_env)).
    pub fn from_key(key: Option<String>) -> Result<Self> {
        let api_key = key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| anyhow!("missing API key: set {API_KEY_VAR} in the environment"))?;
        Ok(Self::new(api_key))
    }
}
