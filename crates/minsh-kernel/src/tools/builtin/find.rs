//! find — Search for files in a directory hierarchy.
//!
//! ```text
//! find                    # every file under the working directory
//! find src -name main.rs  # files named exactly main.rs
//! ```
//!
//! The walk uses an explicit stack, so depth is bounded only by memory.
//! Each directory is read once, its entries sorted by name, and the result
//! comes out in pre-order. Symlinks are reported but never descended into.

use async_trait::async_trait;
use std::path::PathBuf;

use minsh_types::{ExecResult, EXIT_USAGE};

use crate::tools::{ArgError, ExecContext, ParamSchema, Tool, ToolArgs, ToolSchema};
use crate::vfs::Filesystem;

/// Find tool: print files below a directory, optionally matching a name.
pub struct Find;

#[async_trait]
impl Tool for Find {
    fn name(&self) -> &str {
        "find"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("find", "Search for files in directory hierarchy")
            .usage("find [DIR] [-name NAME]")
            .param(
                ParamSchema::value("name", "Only print files with exactly this name")
                    .with_aliases(["-name", "--name"]),
            )
            .example("Every file below the working directory", "find")
            .example("Find manifests under src", "find src -name Cargo.toml")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        if args.positional.len() > 1 {
            let e = ArgError::TooManyArguments {
                have: args.positional.len(),
                max: 1,
            };
            return ExecResult::failure(EXIT_USAGE, format!("find: {}", e));
        }

        let start = args.get_positional(0).unwrap_or(".");
        let root = ctx.resolve_path(start);
        let name = args.get_named("name");

        match ctx.fs.stat(&root).await {
            Ok(entry) if entry.is_dir() => {}
            Ok(_) => return ExecResult::failure(1, format!("find: '{}': Not a directory", start)),
            Err(e) => return ExecResult::failure(1, format!("find: '{}': {}", start, e)),
        }

        let walk = walk(ctx.fs.as_ref(), root, start, name).await;
        let code = if walk.errors.is_empty() { 0 } else { 1 };
        ExecResult::from_output(code, walk.matches.join("\n"), walk.errors.join("\n"))
    }
}

/// A pending step of the walk.
enum Work {
    /// Read this directory and schedule its children.
    Dir { path: PathBuf, shown: String },
    /// Report this file if it matches.
    File { name: String, shown: String },
}

#[derive(Default)]
struct Walk {
    matches: Vec<String>,
    errors: Vec<String>,
}

async fn walk(fs: &dyn Filesystem, root: PathBuf, start: &str, name: Option<&str>) -> Walk {
    let mut walk = Walk::default();
    let mut stack = vec![Work::Dir {
        path: root,
        shown: start.to_string(),
    }];

    while let Some(work) = stack.pop() {
        match work {
            Work::File { name: file, shown } => {
                if name.is_none_or(|wanted| wanted == file) {
                    walk.matches.push(shown);
                }
            }
            Work::Dir { path, shown } => {
                let mut entries = match fs.list(&path).await {
                    Ok(entries) => entries,
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "find: skipping directory");
                        walk.errors.push(format!("find: '{}': {}", shown, e));
                        continue;
                    }
                };
                entries.sort_by(|a, b| a.name.cmp(&b.name));

                // Reverse so the first name is popped first
                for entry in entries.into_iter().rev() {
                    let child_shown = join_shown(&shown, &entry.name);
                    if entry.is_dir() {
                        stack.push(Work::Dir {
                            path: path.join(&entry.name),
                            shown: child_shown,
                        });
                    } else {
                        stack.push(Work::File {
                            name: entry.name,
                            shown: child_shown,
                        });
                    }
                }
            }
        }
    }

    walk
}

fn join_shown(base: &str, name: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, name)
    } else {
        format!("{}/{}", base, name)
    }
}
