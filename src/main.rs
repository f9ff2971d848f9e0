//! CLI entry point for project-tree

use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use project_tree::tree::{DEFAULT_MAX_DEPTH, resolve_root};
use project_tree::{DEFAULT_OUTPUT_FILE, RenderConfig, render, write_output};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::debug;

/// Logging verbosity
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
    /// No log output at all
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "project-tree")]
#[command(about = "Save a folder-and-file outline of a directory tree to a text file")]
#[command(version)]
struct Args {
    /// Directory to outline
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", default_value_t = DEFAULT_MAX_DEPTH)]
    level: usize,

    /// Show hidden files and directories (node_modules stays excluded)
    #[arg(short, long)]
    all: bool,

    /// File to write the outline to (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Logging verbosity, written to stderr
    #[arg(long = "log-level", value_name = "LEVEL", value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

/// Determine whether to color console output based on the environment.
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

/// Print the confirmation line, green when color is enabled.
fn print_saved(output: &Path) -> std::io::Result<()> {
    let choice = if should_use_color() {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "Project structure saved to '{}'", output.display())?;
    stdout.reset()?;
    writeln!(stdout)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("parsed arguments: {args:?}");

    let config = RenderConfig {
        max_depth: args.level,
        ignore_hidden: !args.all,
    };

    let root = match resolve_root(&args.path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("project-tree: cannot determine current directory: {}", e);
            process::exit(1);
        }
    };

    let rendered = match render(&root, &config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("project-tree: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_output(&args.output, &rendered) {
        eprintln!("project-tree: {}", e);
        process::exit(1);
    }

    if let Err(e) = print_saved(&args.output) {
        eprintln!("project-tree: error writing output: {}", e);
        process::exit(1);
    }
}
