//! Tool system for minsh.
//!
//! Every command is a tool. The registry built at startup is the shell's
//! handler table: a read-only map from command name to tool.
//!
//! ```text
//! ToolRegistry
//! ├── ls    (listing subsystem)
//! ├── cd, pwd
//! ├── find  (recursive name search)
//! └── help
//! ```

pub mod args;
mod builtin;
mod context;
mod registry;
mod traits;

pub use args::{parse_args, ArgError};
pub use builtin::{register_builtins, Cd, Find, Help, Ls, Pwd};
pub use context::ExecContext;
pub use registry::ToolRegistry;
pub use traits::{ParamKind, ParamSchema, Tool, ToolArgs, ToolSchema};
