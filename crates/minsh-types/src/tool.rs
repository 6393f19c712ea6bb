//! Tool schema and argument types.
//!
//! A `ToolSchema` is the declarative description of a command's flags: each
//! `ParamSchema` names a canonical key, the spellings that select it, and
//! whether it is a boolean switch or takes a value. The kernel's argument
//! parser and the `help` builtin both read from the same schema.

use std::collections::{HashMap, HashSet};

/// Whether a parameter is a switch or carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Boolean switch, e.g. `-l` or `--all`.
    Flag,
    /// Takes a value, e.g. `--sort=size`, `--sort size`, `-name foo`.
    Value,
}

/// Schema for a tool parameter.
#[derive(Debug, Clone)]
pub struct ParamSchema {
    /// Canonical parameter name (the key in `ToolArgs`).
    pub name: String,
    /// Switch or value.
    pub kind: ParamKind,
    /// Description for help text.
    pub description: String,
    /// Spellings that select this parameter, dashes included (e.g. `-a`, `--all`).
    pub aliases: Vec<String>,
}

impl ParamSchema {
    /// Create a boolean switch.
    pub fn flag(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Flag,
            description: description.into(),
            aliases: Vec::new(),
        }
    }

    /// Create a parameter that takes a value.
    pub fn value(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ParamKind::Value,
            description: description.into(),
            aliases: Vec::new(),
        }
    }

    /// Add the spellings that select this parameter.
    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Check if a flag as written on the command line selects this parameter.
    pub fn matches_flag(&self, flag: &str) -> bool {
        self.aliases.iter().any(|a| a == flag)
    }

    /// True if one of the aliases is the single-character form `-c`.
    pub fn matches_short(&self, c: char) -> bool {
        self.aliases.iter().any(|a| {
            let mut chars = a.chars();
            chars.next() == Some('-') && chars.next() == Some(c) && chars.next().is_none()
        })
    }
}

/// An example showing how to use a tool.
#[derive(Debug, Clone)]
pub struct Example {
    /// Short description of what the example demonstrates.
    pub description: String,
    /// The example command line.
    pub code: String,
}

impl Example {
    /// Create a new example.
    pub fn new(description: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            code: code.into(),
        }
    }
}

/// Schema describing a tool's interface.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    /// Tool name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Synopsis line shown by `help`, e.g. `ls [OPTION]... [FILE]...`.
    pub usage: Option<String>,
    /// Parameter definitions.
    pub params: Vec<ParamSchema>,
    /// Usage examples.
    pub examples: Vec<Example>,
}

impl ToolSchema {
    /// Create a new tool schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: None,
            params: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Set the synopsis line.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    /// Add a parameter to the schema.
    pub fn param(mut self, param: ParamSchema) -> Self {
        self.params.push(param);
        self
    }

    /// Add an example to the schema.
    pub fn example(mut self, description: impl Into<String>, code: impl Into<String>) -> Self {
        self.examples.push(Example::new(description, code));
        self
    }

    /// Find the parameter selected by a flag spelling.
    pub fn find_flag(&self, flag: &str) -> Option<&ParamSchema> {
        self.params.iter().find(|p| p.matches_flag(flag))
    }

    /// Find the parameter selected by a single short character.
    pub fn find_short(&self, c: char) -> Option<&ParamSchema> {
        self.params.iter().find(|p| p.matches_short(c))
    }
}

/// Parsed arguments ready for tool execution.
///
/// Flags and named values are stored under the parameter's canonical name,
/// so `-a` and `--all` both land as `all`.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Positional arguments in order.
    pub positional: Vec<String>,
    /// Named values by canonical key. The last occurrence wins.
    pub named: HashMap<String, String>,
    /// Boolean switches by canonical key.
    pub flags: HashSet<String>,
}

impl ToolArgs {
    /// Create empty args.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a positional argument by index.
    pub fn get_positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Get a named value by key.
    pub fn get_named(&self, key: &str) -> Option<&str> {
        self.named.get(key).map(String::as_str)
    }

    /// Check if a switch is set.
    pub fn has_flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}
