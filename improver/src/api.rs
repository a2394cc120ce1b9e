//! Chat-completion client for the OpenAI API.
//!
//! The [`ChatClient`] trait decouples the loop from the HTTP backend. Tests
//! use scripted clients that return predetermined completions without
//! touching the network.

use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ApiConfig;

/// Chat-completion request body. Sampling parameters are deliberately
/// omitted; the server's defaults apply.
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: String,
}

/// Abstraction over chat-completion backends.
pub trait ChatClient {
    /// Send one prompt as a system message and return the trimmed completion.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Blocking client for the OpenAI chat-completions endpoint.
pub struct OpenAiClient {
    http: Client,
    config: ApiConfig,
}

impl OpenAiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("build http client")?;
        Ok(Self { http, config })
    }
}

impl ChatClient for OpenAiClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "system",
                content: prompt,
            }],
        };

        debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "sending chat completion request"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .with_context(|| format!("POST {url}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(anyhow!("chat completion failed: HTTP {status}: {body}"));
        }

        let parsed: ChatResponse = response
            .json()
            .context("parse chat completion response")?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("chat completion returned no choices"))?;

        info!(reply_len = content.len(), "chat completion received");
        Ok(content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_model_and_system_message() {
        let request = ChatRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "system",
                content: "improve yourself",
            }],
        };

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "improve yourself");
    }

    #[test]
    fn response_deserializes_first_choice_content() {
        let json = r#"{
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "  looks good  " },
                    "finish_reason": "stop"
                }
            ]
        }"#;

        let parsed: ChatResponse = serde_json::from_str(json).expect("deserialize");
        assert_eq!(parsed.choices.len(), 1);
        assert_eq!(parsed.choices[0].message.content, "  looks good  ");
    }

    #[test]
    fn response_with_no_choices_deserializes() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"choices": []}"#).expect("deserialize");
        assert!(parsed.choices.is_empty());
    }
}
