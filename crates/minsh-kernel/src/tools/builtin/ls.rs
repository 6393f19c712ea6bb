//! ls — List directory contents.

use async_trait::async_trait;

use minsh_types::{ExecResult, EXIT_USAGE};

use crate::listing::{
    collect_entries, implied_entries, render_lines, sort_entries, ListedEntry, ListingOptions,
};
use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Ls tool: list directory contents.
pub struct Ls;

#[async_trait]
impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ListingOptions::schema()
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        let options = match ListingOptions::from_args(&args) {
            Ok(options) => options,
            Err(e) => return ExecResult::failure(EXIT_USAGE, format!("ls: {}", e)),
        };

        let fs = ctx.fs.as_ref();
        let mut entries = match collect_entries(fs, &ctx.cwd, &options.targets).await {
            Ok(entries) => entries,
            Err(e) => return ExecResult::failure(1, format!("ls: {}", e)),
        };

        sort_entries(&mut entries, options.sort, options.reverse);

        // `.` and `..` go in front after sorting and never take part in it
        let (current, parent) = match implied_entries(fs, &ctx.cwd).await {
            Ok(pair) => pair,
            Err(e) => return ExecResult::failure(1, format!("ls: {}", e)),
        };

        let mut listed = Vec::with_capacity(entries.len() + 2);
        listed.push(ListedEntry::Current(current));
        listed.push(ListedEntry::Parent(parent));
        listed.extend(entries.into_iter().map(ListedEntry::Real));

        ExecResult::success(render_lines(&listed, &options).join("\n"))
    }
}
