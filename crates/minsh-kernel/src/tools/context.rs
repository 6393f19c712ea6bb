//! Execution context for tools.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::paths;
use crate::vfs::Filesystem;

use super::traits::ToolSchema;

/// Execution context passed to tools.
///
/// Holds the filesystem and the shell's working directory. The working
/// directory lives here rather than in the process so that every tool sees
/// the same value and tests can run side by side.
pub struct ExecContext {
    /// Filesystem every tool goes through.
    pub fs: Arc<dyn Filesystem>,
    /// Current working directory (absolute).
    pub cwd: PathBuf,
    /// Previous working directory (for `cd -`).
    pub prev_cwd: Option<PathBuf>,
    /// Home directory (for bare `cd`), if known.
    pub home: Option<PathBuf>,
    /// Tool schemas for the help command.
    pub tool_schemas: Vec<ToolSchema>,
}

impl ExecContext {
    /// Create a context rooted at `cwd`.
    pub fn new(fs: Arc<dyn Filesystem>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            cwd: cwd.into(),
            prev_cwd: None,
            home: None,
            tool_schemas: Vec::new(),
        }
    }

    /// Set the home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Set the available tool schemas (for help command).
    pub fn set_tool_schemas(&mut self, schemas: Vec<ToolSchema>) {
        self.tool_schemas = schemas;
    }

    /// Resolve a path argument relative to cwd.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        paths::resolve(&self.cwd, path)
    }

    /// Change the current working directory.
    ///
    /// Saves the old directory for `cd -` support.
    pub fn set_cwd(&mut self, path: PathBuf) {
        self.prev_cwd = Some(std::mem::replace(&mut self.cwd, path));
    }

    /// Get the previous working directory (for `cd -`).
    pub fn get_prev_cwd(&self) -> Option<&Path> {
        self.prev_cwd.as_deref()
    }
}
