//! cd — Change working directory.

use async_trait::async_trait;
use std::path::PathBuf;

use minsh_types::{ExecResult, EXIT_USAGE};

use crate::tools::{ArgError, ExecContext, Tool, ToolArgs, ToolSchema};

/// Cd tool: change the shell's working directory.
pub struct Cd;

#[async_trait]
impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change current working directory")
            .usage("cd [DIR | -]")
            .example("Go home", "cd")
            .example("Back to the previous directory", "cd -")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.positional.len() > 1 {
            let e = ArgError::TooManyArguments {
                have: args.positional.len(),
                max: 1,
            };
            return ExecResult::failure(EXIT_USAGE, format!("cd: {}", e));
        }

        let target = args.get_positional(0);
        let resolved: PathBuf = match target {
            None => match &ctx.home {
                Some(home) => home.clone(),
                None => return ExecResult::failure(1, "cd: HOME not set"),
            },
            Some("-") => match ctx.get_prev_cwd() {
                Some(prev) => prev.to_path_buf(),
                None => return ExecResult::failure(1, "cd: OLDPWD not set"),
            },
            Some(path) => ctx.resolve_path(path),
        };
        let shown = target.map_or_else(|| resolved.display().to_string(), str::to_string);

        match ctx.fs.stat(&resolved).await {
            Ok(entry) if entry.is_dir() => {
                tracing::debug!(from = %ctx.cwd.display(), to = %resolved.display(), "cd");
                ctx.set_cwd(resolved.clone());
                // `cd -` announces where it landed
                if target == Some("-") {
                    ExecResult::success(resolved.display().to_string())
                } else {
                    ExecResult::success("")
                }
            }
            Ok(_) => ExecResult::failure(1, format!("cd: {}: Not a directory", shown)),
            Err(e) => ExecResult::failure(1, format!("cd: {}: {}", shown, e)),
        }
    }
}
