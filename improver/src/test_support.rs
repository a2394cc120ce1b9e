//! Test-only scripted chat clients.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{Result, anyhow};

use crate::api::ChatClient;

/// One scripted reply for a [`ScriptedClient`].
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    /// Successful completion with this text.
    Text(String),
    /// Failed call with this error message.
    Failure(String),
}

/// Chat client that returns predetermined replies in order and records
/// every prompt it was given.
pub struct ScriptedClient {
    replies: Mutex<VecDeque<ScriptedReply>>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.seen.lock().expect("seen lock").clone()
    }
}

impl ChatClient for ScriptedClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        self.seen
            .lock()
            .expect("seen lock")
            .push(prompt.to_string());
        let reply = self
            .replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .ok_or_else(|| anyhow!("scripted client exhausted"))?;
        match reply {
            ScriptedReply::Text(text) => Ok(text.trim().to_string()),
            ScriptedReply::Failure(message) => Err(anyhow!(message)),
        }
    }
}
