//! ExecResult — the structured result of every command execution.

/// Exit status used for argument and usage errors.
pub const EXIT_USAGE: i64 = 2;

/// Exit status used when a command name does not resolve.
pub const EXIT_NOT_FOUND: i64 = 127;

/// The result of executing a command.
///
/// Handlers never write to the terminal themselves: they return their
/// standard output and diagnostics here, and the REPL prints them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecResult {
    /// Exit code. 0 means success.
    pub code: i64,
    /// Standard output text.
    pub out: String,
    /// Diagnostic text.
    pub err: String,
}

impl ExecResult {
    /// Create a successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            code: 0,
            out: out.into(),
            err: String::new(),
        }
    }

    /// Create a failed result with an error message.
    pub fn failure(code: i64, err: impl Into<String>) -> Self {
        Self {
            code,
            out: String::new(),
            err: err.into(),
        }
    }

    /// Create a result from both streams.
    ///
    /// Used by commands that produce partial output alongside diagnostics,
    /// such as a search that skips unreadable directories.
    pub fn from_output(code: i64, out: impl Into<String>, err: impl Into<String>) -> Self {
        Self {
            code,
            out: out.into(),
            err: err.into(),
        }
    }

    /// True if the command succeeded (exit code 0).
    pub fn ok(&self) -> bool {
        self.code == 0
    }
}

impl Default for ExecResult {
    fn default() -> Self {
        Self::success("")
    }
}
