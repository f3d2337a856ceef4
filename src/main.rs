//! aspnet-fmt CLI - checks or fixes source trees from the command line
//!
//! Translates arguments into a `Formatter` run and the run's outcome into a
//! process exit code: 0 clean, 1 violations, 2 fatal error.

use aspnet_fmt::{resolve_directories, FormatResult, Formatter, FormatterConfig, RunMode};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

const DEBUG_FLAG: &str = "--debug";

/// aspnet-fmt - ASP.NET Code Formatter
#[derive(Parser, Debug)]
#[command(name = "aspnet-fmt")]
#[command(version)]
#[command(about = "Checks code against ASP.NET Code style guidelines")]
#[command(
    long_about = "Recursively scans directories and checks every file against the ASP.NET formatting rules. Pass --fix to rewrite failing files in place. The .git, bin and obj directories are skipped at any depth."
)]
#[command(disable_help_flag = true)]
struct Cli {
    /// The directories to check (defaults to the current directory)
    #[arg(value_name = "DIRECTORIES")]
    directories: Vec<PathBuf>,

    /// Fix the issues, rather than just reporting them
    #[arg(short, long)]
    fix: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print help
    #[arg(short = 'h', long = "help", short_alias = '?', action = ArgAction::Help)]
    help: Option<bool>,
}

fn main() {
    let mut args: Vec<OsString> = std::env::args_os().collect();

    if strip_debug_flag(&mut args) {
        if let Err(e) = wait_for_debugger(&mut io::stdin().lock(), &mut io::stdout()) {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    }

    let cli = Cli::parse_from(args);

    // Initialize logging
    init_logging(cli.verbose);

    let stdout = io::stdout();
    match run_format(cli.config, cli.directories, cli.fix, &mut stdout.lock()) {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    }
}

/// Remove every `--debug` argument, returning whether one was present
fn strip_debug_flag(args: &mut Vec<OsString>) -> bool {
    let before = args.len();
    args.retain(|arg| arg != DEBUG_FLAG);
    args.len() != before
}

/// Announce the process id and block until a line arrives on `input`
fn wait_for_debugger<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<()> {
    writeln!(output, "Waiting for debugger. Process ID: {}", process::id())?;
    writeln!(output, "Press ENTER to resume execution")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

fn run_format<W: Write>(
    config_path: Option<PathBuf>,
    directories: Vec<PathBuf>,
    fix: bool,
    out: &mut W,
) -> FormatResult<i32> {
    let config = match config_path {
        Some(path) => FormatterConfig::load_from_file(path)?,
        None => FormatterConfig::discover()?,
    };

    let formatter = Formatter::new(&config, RunMode::from_fix_flag(fix))?;
    let directories = resolve_directories(directories)?;

    let success = formatter.run(&directories, out)?;
    out.flush()?;

    Ok(if success { 0 } else { 1 })
}

/// RUST_LOG, when set, takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
