//! Append-only run journal.
//!
//! # Separation of Concerns
//!
//! - **Tracing (`logging`)**: dev diagnostics via `RUST_LOG`, output to
//!   stderr. Not persisted, not part of product output.
//!
//! - **Journal (this module)**: the product artifact
//!   `self_improvement_log.txt`. Always appended, never truncated,
//!   unaffected by `RUST_LOG`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Append-only writer for the run journal.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one message followed by a newline.
    ///
    /// Creates the file on first use. The file is opened in append mode so
    /// repeated runs only ever grow it.
    pub fn append(&self, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .with_context(|| format!("open journal {}", self.path.display()))?;
        writeln!(file, "{message}")
            .with_context(|| format!("append to journal {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn append_creates_file_and_adds_lines() {
        let temp = tempfile::tempdir().expect("tempdir");
        let journal = Journal::new(temp.path().join("log.txt"));

        journal.append("first").expect("append");
        journal.append("second").expect("append");

        let contents = fs::read_to_string(journal.path()).expect("read");
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn fresh_handles_never_truncate() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("log.txt");

        Journal::new(&path).append("run one").expect("append");
        Journal::new(&path).append("run two").expect("append");

        let contents = fs::read_to_string(&path).expect("read");
        assert!(contents.starts_with("run one\n"));
        assert!(contents.ends_with("run two\n"));
    }
}
