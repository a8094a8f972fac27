//! Subprocess invocation of the external gh CLI
//!
//! Every call spawns a fresh `gh` process and blocks until it exits. There is
//! no timeout, retry, or cancellation; the external tool owns authentication
//! and transport.

use std::process::Command;

use tracing::debug;

use crate::{Error, Result};

/// Seam for invoking the external gh CLI
///
/// `capture` is for calls whose stdout this program consumes (the search
/// query); `interactive` is for calls that own the terminal (`gh issue
/// close`, `gh issue create`), trusting gh's own reporting.
pub trait GhRunner {
    /// Run gh with the given arguments and return its captured stdout
    fn capture(&self, args: &[&str]) -> Result<String>;

    /// Run gh with the given arguments, inheriting the terminal
    fn interactive(&self, args: &[&str]) -> Result<()>;
}

/// Runner backed by the real gh executable
#[derive(Debug, Clone)]
pub struct GhCli {
    /// Path to the gh executable (defaults to "gh" in PATH)
    gh_path: String,
}

impl Default for GhCli {
    fn default() -> Self {
        Self {
            gh_path: "gh".to_string(),
        }
    }
}

impl GhCli {
    /// Create a new runner with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom path to the gh executable
    pub fn with_gh_path(mut self, path: impl Into<String>) -> Self {
        self.gh_path = path.into();
        self
    }

    fn spawn_error(&self, err: std::io::Error) -> Error {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::Gh(format!(
                "gh executable not found at '{}'. Is the GitHub CLI installed?",
                self.gh_path
            ))
        } else {
            Error::Io(err)
        }
    }
}

impl GhRunner for GhCli {
    fn capture(&self, args: &[&str]) -> Result<String> {
        debug!(gh = %self.gh_path, ?args, "running gh (captured)");

        let output = Command::new(&self.gh_path)
            .args(args)
            .output()
            .map_err(|e| self.spawn_error(e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Gh(format!(
                "gh exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| Error::Gh(format!("gh produced non-UTF-8 output: {}", e)))
    }

    fn interactive(&self, args: &[&str]) -> Result<()> {
        debug!(gh = %self.gh_path, ?args, "running gh (interactive)");

        let status = Command::new(&self.gh_path)
            .args(args)
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if !status.success() {
            return Err(Error::Gh(format!("gh exited with {}", status)));
        }

        Ok(())
    }
}
