//! Orchestration for a single `improver run`.
//!
//! Three sequential steps: load the embedded source, request improvement
//! suggestions, request a full rewrite and save it. A failed call degrades
//! the run (empty suggestions, skipped save) but never aborts it; the
//! failure is recorded in the journal and the process still exits cleanly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::ChatClient;
use crate::config;
use crate::journal::Journal;
use crate::prompts::{build_rewrite_prompt, build_suggestion_prompt};
use crate::source::own_source;

/// File targets for one run.
#[derive(Debug, Clone)]
pub struct RunPaths {
    /// Where the generated rewrite is written (full overwrite).
    pub output_path: PathBuf,
    /// The append-only run journal.
    pub journal_path: PathBuf,
}

impl RunPaths {
    /// The fixed file names from [`config`], rooted in `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            output_path: dir.join(config::OUTPUT_FILE),
            journal_path: dir.join(config::JOURNAL_FILE),
        }
    }
}

/// Outcome of one run, for callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Whether the suggestion call produced non-empty tips.
    pub got_tips: bool,
    /// Whether a rewrite was received and saved to the output file.
    pub saved: bool,
}

/// Execute one improvement run.
///
/// Returns `Err` only for local failures (journal or output writes, prompt
/// rendering); network failures are journaled and degrade the outcome.
pub fn run_improvement<C: ChatClient>(client: &C, paths: &RunPaths) -> Result<RunOutcome> {
    let journal = Journal::new(&paths.journal_path);
    journal.append("Self-improvement run started.")?;

    let source = own_source();

    let tips = request_tips(client, &journal, &source)?;
    if let Some(tips) = &tips {
        journal.append(&format!("Tips received:\n{tips}"))?;
    }

    let rewrite = request_rewrite(client, &journal, &source, tips.as_deref().unwrap_or(""))?;

    let saved = match rewrite {
        Some(code) => {
            save_rewrite(&paths.output_path, &code)?;
            journal.append(&format!(
                "Saved improved code to {}",
                paths.output_path.display()
            ))?;
            info!(bytes = code.len(), path = %paths.output_path.display(), "rewrite saved");
            true
        }
        None => {
            journal.append("Failed to receive improved code.")?;
            false
        }
    };

    journal.append("Run completed. Awaiting manual update.")?;
    Ok(RunOutcome {
        got_tips: tips.is_some(),
        saved,
    })
}

/// Suggestion call. An empty completion counts as no tips.
fn request_tips<C: ChatClient>(
    client: &C,
    journal: &Journal,
    source: &str,
) -> Result<Option<String>> {
    let prompt = build_suggestion_prompt(source)?;
    match client.complete(&prompt) {
        Ok(tips) => Ok((!tips.is_empty()).then_some(tips)),
        Err(err) => {
            warn!(error = %err, "suggestion call failed");
            journal.append(&format!("Error in suggestion request: {err:#}"))?;
            Ok(None)
        }
    }
}

/// Improvement call. An empty completion counts as no rewrite.
fn request_rewrite<C: ChatClient>(
    client: &C,
    journal: &Journal,
    source: &str,
    tips: &str,
) -> Result<Option<String>> {
    let prompt = build_rewrite_prompt(source, tips)?;
    match client.complete(&prompt) {
        Ok(code) => Ok((!code.is_empty()).then_some(code)),
        Err(err) => {
            warn!(error = %err, "improvement call failed");
            journal.append(&format!("Error in improvement request: {err:#}"))?;
            Ok(None)
        }
    }
}

fn save_rewrite(path: &Path, code: &str) -> Result<()> {
    fs::write(path, code).with_context(|| format!("write rewrite {}", path.display()))
}
