//! Command dispatch: one input line to one tool invocation.
//!
//! ```text
//! "ls -la src\n" ──▶ split_line ──▶ ["ls", "-la", "src"]
//!                                       │
//!                           ToolRegistry::get("ls")
//!                                       │
//!                      parse_args(schema, ["-la", "src"])
//!                                       │
//!                           Tool::execute(args, ctx)
//! ```

use std::sync::Arc;

use minsh_types::{ExecResult, EXIT_NOT_FOUND, EXIT_USAGE};

use crate::tools::{parse_args, ExecContext, ToolRegistry};

/// Strip the line terminator and split on runs of whitespace.
///
/// Never yields empty tokens.
pub fn split_line(line: &str) -> Vec<String> {
    let line = line
        .strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .unwrap_or(line);
    line.split_whitespace().map(str::to_string).collect()
}

/// Resolves command names against the handler table and runs them.
#[derive(Clone)]
pub struct Dispatcher {
    tools: Arc<ToolRegistry>,
}

impl Dispatcher {
    /// Create a dispatcher over a finished registry.
    pub fn new(tools: Arc<ToolRegistry>) -> Self {
        Self { tools }
    }

    /// The handler table.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Run one input line.
    ///
    /// A blank line succeeds with no output. An unknown name fails with
    /// status 127; bad arguments fail with status 2 before the tool runs.
    pub async fn dispatch(&self, line: &str, ctx: &mut ExecContext) -> ExecResult {
        let tokens = split_line(line);
        let Some((name, rest)) = tokens.split_first() else {
            return ExecResult::default();
        };

        let Some(tool) = self.tools.get(name) else {
            tracing::debug!(command = %name, "no such command");
            return ExecResult::failure(EXIT_NOT_FOUND, format!("Command {} not found", name));
        };

        let args = match parse_args(&tool.schema(), rest) {
            Ok(args) => args,
            Err(e) => return ExecResult::failure(EXIT_USAGE, format!("{}: {}", name, e)),
        };

        tracing::debug!(command = %name, argc = rest.len(), "dispatching");
        let result = tool.execute(args, ctx).await;
        tracing::debug!(command = %name, code = result.code, "finished");
        result
    }
}
