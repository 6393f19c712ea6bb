//! help — Describe the available tools.
//!
//! Output is generated from the same `ToolSchema` the argument parser reads,
//! so the listed flags are exactly the accepted ones.

use async_trait::async_trait;
use std::fmt::Write;

use minsh_types::{ExecResult, ParamKind};

use crate::tools::{ExecContext, Tool, ToolArgs, ToolSchema};

/// Help tool: list tools, or show one tool's flags.
pub struct Help;

#[async_trait]
impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("help", "Show available commands or the options of one command")
            .usage("help [COMMAND]")
            .example("List commands", "help")
            .example("Options accepted by ls", "help ls")
    }

    async fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult {
        match args.get_positional(0) {
            None => ExecResult::success(format_tool_list(&ctx.tool_schemas)),
            Some(name) => match ctx.tool_schemas.iter().find(|s| s.name == name) {
                Some(schema) => ExecResult::success(format_tool_help(schema)),
                None => ExecResult::failure(1, format!("help: no such command: {}", name)),
            },
        }
    }
}

fn format_tool_list(schemas: &[ToolSchema]) -> String {
    let width = schemas.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let mut output = String::from("Commands:\n");
    for schema in schemas {
        let _ = writeln!(output, "  {:width$}  {}", schema.name, schema.description);
    }
    output.push_str("  exit, quit  Leave the shell\n\nUse 'help COMMAND' for the options of one command.");
    output
}

fn format_tool_help(schema: &ToolSchema) -> String {
    let mut output = format!("{}: {}\n", schema.name, schema.description);
    if let Some(usage) = &schema.usage {
        let _ = write!(output, "\nUsage: {}\n", usage);
    }

    if !schema.params.is_empty() {
        output.push_str("\nOptions:\n");
        for param in &schema.params {
            let mut spelling = param.aliases.join(", ");
            if param.kind == ParamKind::Value {
                spelling.push_str(" WORD");
            }
            let _ = writeln!(output, "  {:<28} {}", spelling, param.description);
        }
    }

    if !schema.examples.is_empty() {
        output.push_str("\nExamples:\n");
        for example in &schema.examples {
            let _ = writeln!(output, "  # {}", example.description);
            let _ = writeln!(output, "  {}", example.code);
        }
    }

    output.trim_end().to_string()
}
