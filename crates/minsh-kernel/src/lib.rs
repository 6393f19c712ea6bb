//! minsh-kernel: the core of the minsh shell.
//!
//! This crate provides:
//!
//! - **Dispatch**: line splitting and name → tool resolution
//! - **Tools**: the `Tool` trait, the registry, schema-driven argument
//!   parsing and the builtin commands (`ls`, `cd`, `pwd`, `find`, `help`)
//! - **Listing**: entry gathering, sorting, size formatting and rendering
//!   behind `ls`
//! - **VFS**: the `Filesystem` trait with local and in-memory backends
//! - **Paths**: home directory lookup and lexical path resolution

pub mod dispatch;
pub mod kernel;
pub mod listing;
pub mod paths;
pub mod tools;
pub mod vfs;

pub use dispatch::{split_line, Dispatcher};
pub use kernel::{FsMode, Kernel, KernelConfig};
pub use minsh_types::{DirEntry, DirEntryKind, ExecResult, EXIT_NOT_FOUND, EXIT_USAGE};
pub use paths::home_dir;
pub use vfs::{Filesystem, LocalFs, MemoryFs};
