//! The Kernel: owns the handler table and the shell state.
//!
//! A `Kernel` pairs a read-only `Dispatcher` with the one piece of mutable
//! state, the `ExecContext` holding the working directory. Frontends (the
//! REPL, `minsh -c`, tests) feed it lines and print what comes back.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Kernel                       │
//! │  ├── Dispatcher              │
//! │  │    └── Arc<ToolRegistry>  │  built once, read-only
//! │  └── ExecContext             │
//! │       ├── Arc<dyn Filesystem>│  LocalFs or MemoryFs
//! │       └── cwd / prev_cwd     │
//! └──────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use minsh_types::ExecResult;

use crate::dispatch::Dispatcher;
use crate::paths;
use crate::tools::{register_builtins, ExecContext, ToolRegistry};
use crate::vfs::{Filesystem, LocalFs, MemoryFs};

/// Which filesystem the kernel's tools see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FsMode {
    /// The host filesystem, native absolute paths.
    #[default]
    Local,
    /// An empty in-memory tree (tests, demos).
    Memory,
}

/// Configuration for initializing a kernel.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Name of this kernel (for identification in logs).
    pub name: String,

    /// Filesystem backend.
    pub fs_mode: FsMode,

    /// Initial working directory (absolute).
    pub cwd: PathBuf,

    /// Home directory for bare `cd`, if any.
    pub home: Option<PathBuf>,
}

impl KernelConfig {
    /// Config for an interactive session on the host filesystem.
    ///
    /// Starts in the process working directory with the user's home
    /// directory; failing to determine either is an error.
    pub fn repl() -> Result<Self> {
        let cwd = std::env::current_dir().context("cannot determine the working directory")?;
        let home = paths::home_dir().context("cannot determine the home directory")?;
        Ok(Self {
            name: "repl".to_string(),
            fs_mode: FsMode::Local,
            cwd,
            home: Some(home),
        })
    }

    /// Config for an in-memory kernel rooted at `/`.
    pub fn transient() -> Self {
        Self {
            name: "transient".to_string(),
            fs_mode: FsMode::Memory,
            cwd: PathBuf::from("/"),
            home: None,
        }
    }

    /// Set the initial working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Set the home directory.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }
}

/// The shell core: dispatch plus state.
pub struct Kernel {
    name: String,
    dispatcher: Dispatcher,
    ctx: ExecContext,
}

impl Kernel {
    /// Create a kernel with the backend the config names.
    pub fn new(config: KernelConfig) -> Result<Self> {
        let fs: Arc<dyn Filesystem> = match config.fs_mode {
            FsMode::Local => Arc::new(LocalFs::new()),
            FsMode::Memory => Arc::new(MemoryFs::new()),
        };
        Self::with_fs(config, fs)
    }

    /// Create a kernel over a caller-supplied filesystem.
    pub fn with_fs(config: KernelConfig, fs: Arc<dyn Filesystem>) -> Result<Self> {
        if !config.cwd.is_absolute() {
            anyhow::bail!(
                "initial working directory must be absolute: {}",
                config.cwd.display()
            );
        }

        let mut registry = ToolRegistry::new();
        register_builtins(&mut registry);
        let dispatcher = Dispatcher::new(Arc::new(registry));

        let mut ctx = ExecContext::new(fs, paths::normalize(&config.cwd));
        ctx.home = config.home;
        ctx.set_tool_schemas(dispatcher.tools().schemas());

        tracing::debug!(
            kernel = %config.name,
            cwd = %ctx.cwd.display(),
            tools = ?dispatcher.tools().names(),
            "kernel ready"
        );

        Ok(Self {
            name: config.name,
            dispatcher,
            ctx,
        })
    }

    /// Run one input line.
    pub async fn execute(&mut self, line: &str) -> ExecResult {
        self.dispatcher.dispatch(line, &mut self.ctx).await
    }

    /// The shell's working directory.
    pub fn cwd(&self) -> &Path {
        &self.ctx.cwd
    }

    /// The home directory, if known.
    pub fn home(&self) -> Option<&Path> {
        self.ctx.home.as_deref()
    }

    /// The kernel's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
