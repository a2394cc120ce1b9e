//! One-shot API smoke check.

use anyhow::Result;

use crate::api::ChatClient;

const PROBE_PROMPT: &str = "Hello there!";

/// Send a fixed prompt through the client and return the completion.
///
/// Unlike [`crate::improve`], failures propagate: the probe exists to
/// surface credential and connectivity problems loudly, and it writes
/// nothing to the journal.
pub fn run_probe<C: ChatClient>(client: &C) -> Result<String> {
    client.complete(PROBE_PROMPT)
}
