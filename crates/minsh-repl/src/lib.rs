//! minsh REPL: the interactive front end.
//!
//! Reads lines with rustyline, hands them to the kernel one at a time on a
//! current-thread runtime, and prints what comes back. The REPL itself only
//! understands `exit` and `quit`; everything else goes through dispatch.

pub mod config;

use std::path::Path;

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use tokio::runtime::{Builder, Runtime};

use minsh_kernel::{split_line, ExecResult, Kernel, KernelConfig};

pub use config::ShellConfig;

/// What a line of input amounted to.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Nothing to do (blank line).
    Empty,
    /// A command ran.
    Ran(ExecResult),
    /// The user asked to leave.
    Exit,
}

/// REPL state: the kernel plus the runtime that drives it.
pub struct Repl {
    kernel: Kernel,
    runtime: Runtime,
    config: ShellConfig,
}

impl Repl {
    /// Create a REPL on the host filesystem, starting in the process
    /// working directory.
    pub fn new(config: ShellConfig) -> Result<Self> {
        let kernel_config = KernelConfig::repl()?;
        let kernel = Kernel::new(kernel_config).context("Failed to create kernel")?;
        Self::with_kernel(kernel, config)
    }

    /// Create a REPL around an existing kernel.
    pub fn with_kernel(kernel: Kernel, config: ShellConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to create tokio runtime")?;
        tracing::debug!(kernel = kernel.name(), cwd = %kernel.cwd().display(), "repl ready");
        Ok(Self {
            kernel,
            runtime,
            config,
        })
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        let tokens = split_line(line);
        match tokens.first().map(String::as_str) {
            None => LineOutcome::Empty,
            Some("exit" | "quit") => LineOutcome::Exit,
            Some(_) => LineOutcome::Ran(self.runtime.block_on(self.kernel.execute(line))),
        }
    }

    /// The prompt for the current working directory.
    pub fn prompt(&self) -> String {
        render_prompt(self.kernel.cwd(), self.kernel.home(), &self.config)
    }

    /// The kernel behind this REPL.
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }
}

/// Build a prompt like `~/src$ `.
///
/// The home prefix becomes `~` (when enabled) and backslashes become
/// forward slashes.
pub fn render_prompt(cwd: &Path, home: Option<&Path>, config: &ShellConfig) -> String {
    let shown = match home {
        Some(home) if config.abbreviate_home => match cwd.strip_prefix(home) {
            Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
            Ok(rest) => format!("~/{}", rest.display()),
            Err(_) => cwd.display().to_string(),
        },
        _ => cwd.display().to_string(),
    };
    format!("{}{}", shown.replace('\\', "/"), config.prompt_suffix)
}

/// Print a command's output and diagnostics.
pub fn print_result(result: &ExecResult) {
    if !result.out.is_empty() {
        println!("{}", result.out);
    }
    if !result.err.is_empty() {
        eprintln!("{}", result.err);
    }
}

/// Counts consecutive failed reads (end of input, I/O errors).
///
/// A successful read resets the count; Ctrl-C leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailures {
    count: u32,
    limit: u32,
}

impl ReadFailures {
    /// Give up after `limit` consecutive failures. A limit of 0 acts as 1.
    pub fn new(limit: u32) -> Self {
        Self {
            count: 0,
            limit: limit.max(1),
        }
    }

    /// A line was read.
    pub fn record_ok(&mut self) {
        self.count = 0;
    }

    /// A read failed. Returns true once the limit is reached.
    pub fn record_failure(&mut self) -> bool {
        self.count += 1;
        self.count >= self.limit
    }

    /// The user pressed Ctrl-C; not a failure.
    pub fn interrupted(&mut self) {}

    /// Consecutive failures so far.
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Run one line against a fresh kernel and return its exit status.
pub fn run_command(line: &str) -> Result<i64> {
    let mut repl = Repl::new(ShellConfig::default())?;
    match repl.process_line(line) {
        LineOutcome::Ran(result) => {
            print_result(&result);
            Ok(result.code)
        }
        LineOutcome::Empty | LineOutcome::Exit => Ok(0),
    }
}

/// Run the interactive loop until `exit`, `quit`, or too many failed reads.
pub fn run(config: ShellConfig) -> Result<()> {
    let editor_config = rustyline::Config::builder()
        .max_history_size(config.history_size)
        .context("Invalid history size")?
        .build();
    let mut rl: Editor<(), DefaultHistory> =
        Editor::with_config(editor_config).context("Failed to create editor")?;

    let mut failures = ReadFailures::new(config.max_read_failures);
    let mut repl = Repl::new(config)?;

    loop {
        match rl.readline(&repl.prompt()) {
            Ok(line) => {
                failures.record_ok();
                if !line.trim().is_empty()
                    && let Err(e) = rl.add_history_entry(line.as_str())
                {
                    tracing::warn!("Failed to add history entry: {}", e);
                }

                match repl.process_line(&line) {
                    LineOutcome::Ran(result) => print_result(&result),
                    LineOutcome::Empty => {}
                    LineOutcome::Exit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                failures.interrupted();
                println!("^C");
            }
            Err(err) => {
                match err {
                    ReadlineError::Eof => eprintln!("minsh: end of input"),
                    other => eprintln!("minsh: read error: {}", other),
                }
                if failures.record_failure() {
                    tracing::warn!(failures = failures.count(), "too many failed reads, leaving");
                    break;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config() -> ShellConfig {
        ShellConfig::default()
    }

    #[test]
    fn read_failures_exit_after_limit() {
        let mut failures = ReadFailures::new(3);
        assert!(!failures.record_failure());
        assert!(!failures.record_failure());
        assert!(failures.record_failure());
        assert_eq!(failures.count(), 3);
    }

    #[test]
    fn read_failures_reset_on_good_line() {
        let mut failures = ReadFailures::new(2);
        assert!(!failures.record_failure());
        failures.record_ok();
        assert_eq!(failures.count(), 0);
        assert!(!failures.record_failure());
        assert!(failures.record_failure());
    }

    #[test]
    fn read_failures_ignore_interrupts() {
        let mut failures = ReadFailures::new(2);
        assert!(!failures.record_failure());
        for _ in 0..10 {
            failures.interrupted();
        }
        assert_eq!(failures.count(), 1);
        assert!(failures.record_failure());
    }

    #[test]
    fn read_failures_limit_of_one() {
        let mut failures = ReadFailures::new(1);
        assert!(failures.record_failure());
    }

    #[test]
    fn read_failures_zero_limit_behaves_like_one() {
        let mut failures = ReadFailures::new(0);
        assert!(failures.record_failure());
    }

    #[test]
    fn read_failures_default_limit() {
        let mut failures = ReadFailures::new(ShellConfig::default().max_read_failures);
        for _ in 0..4 {
            assert!(!failures.record_failure());
        }
        assert!(failures.record_failure());
    }

    #[test]
    fn prompt_abbreviates_home() {
        let home = PathBuf::from("/home/amy");
        let prompt = render_prompt(Path::new("/home/amy/src/minsh"), Some(&home), &config());
        assert_eq!(prompt, "~/src/minsh$ ");
    }

    #[test]
    fn prompt_at_home_is_tilde() {
        let home = PathBuf::from("/home/amy");
        assert_eq!(render_prompt(&home, Some(&home), &config()), "~$ ");
    }

    #[test]
    fn prompt_outside_home() {
        let home = PathBuf::from("/home/amy");
        assert_eq!(render_prompt(Path::new("/etc"), Some(&home), &config()), "/etc$ ");
    }

    #[test]
    fn prompt_sibling_with_common_prefix_not_abbreviated() {
        let home = PathBuf::from("/home/amy");
        let prompt = render_prompt(Path::new("/home/amybeth"), Some(&home), &config());
        assert_eq!(prompt, "/home/amybeth$ ");
    }

    #[test]
    fn prompt_without_abbreviation() {
        let home = PathBuf::from("/home/amy");
        let config = ShellConfig {
            abbreviate_home: false,
            prompt_suffix: "> ".to_string(),
            ..ShellConfig::default()
        };
        assert_eq!(render_prompt(&home, Some(&home), &config), "/home/amy> ");
    }

    #[test]
    fn prompt_without_home() {
        assert_eq!(render_prompt(Path::new("/srv"), None, &config()), "/srv$ ");
    }
}
