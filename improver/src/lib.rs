//! Self-rewriting improvement loop.
//!
//! Each invocation performs three sequential steps: load the program's own
//! embedded source text, ask a chat-completion API for improvement
//! suggestions, then ask the same API for a full rewritten program and save
//! it to a fixed output file for a human to review and swap in manually.
//! The architecture keeps the seams narrow:
//!
//! - **[`api`]**: the [`ChatClient`](api::ChatClient) trait and the blocking
//!   OpenAI implementation. Tests script this seam instead of hitting the
//!   network.
//! - **[`improve`] / [`probe`]**: orchestration of the CLI commands.
//! - **[`journal`]**: the append-only product log, distinct from dev tracing.

pub mod api;
pub mod config;
pub mod improve;
pub mod journal;
pub mod logging;
pub mod probe;
pub mod prompts;
pub mod source;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
