//! minsh CLI entry point.
//!
//! Usage:
//!   minsh                      # Interactive REPL
//!   minsh -c <command>         # Execute one command line and exit

use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use minsh_repl::ShellConfig;

fn main() -> ExitCode {
    // Silent unless RUST_LOG is set; writes to stderr
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        None => {
            let config = ShellConfig::load()?;
            minsh_repl::run(config)?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("minsh {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some("-c") => {
            let cmd = args.get(2).context("-c requires a command argument")?;
            let code = minsh_repl::run_command(cmd)?;
            Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
        }

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'minsh --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(
        r#"minsh v{}

Usage:
  minsh                        Interactive shell
  minsh -c <command>           Execute one command line and exit

Options:
  -c <command>                 Execute command line and exit
  -h, --help                   Show this help
  -V, --version                Show version

Commands:
  ls, cd, pwd, find, help      Type 'help' inside the shell for details
  exit, quit                   Leave the shell

Environment:
  MINSH_CONFIG                 Config file (default: <config dir>/minsh/config.toml)
  RUST_LOG                     Log filter, e.g. RUST_LOG=minsh_kernel=debug
"#,
        env!("CARGO_PKG_VERSION")
    );
}
