//! Core tool trait.

use async_trait::async_trait;

use minsh_types::ExecResult;

use super::context::ExecContext;

pub use minsh_types::{ParamKind, ParamSchema, ToolArgs, ToolSchema};

/// A tool that can be executed.
///
/// Tools receive arguments already parsed against their own schema and
/// report everything through the returned `ExecResult`; they never print.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the tool's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with the given arguments and context.
    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult;
}
