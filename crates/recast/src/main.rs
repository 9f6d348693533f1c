//! Binary entry point for the recast CLI.
//!
//! ```bash
//! # Convert one AST file and print the Python to stdout
//! recast input.json
//!
//! # Convert a directory tree, preserving structure under out/
//! recast asts/ -o out/
//!
//! # Preview with a diff, applying only the loop rule
//! recast input.json --show-diff --rules for-to-range
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info, warn};

use recast::batch::{convert_files, discover_inputs, output_path, render_diff};
use recast_core::frontend::JsonFrontend;
use recast_core::pipeline::Pipeline;
use recast_core::rules::{default_rules, rule_names, rules_by_name, Rule};

/// Extension of the AST files a front-end leaves on disk.
const INPUT_EXTENSION: &str = "json";

// ============================================================================
// CLI Structure
// ============================================================================

/// Rule-driven C++ AST to Python translator.
///
/// Reads the JSON AST a front-end produced for each source file,
/// applies the active rewrite rules, and emits formatted Python.
#[derive(Parser, Debug)]
#[command(name = "recast", version, about = "Rule-driven C++ AST to Python translator")]
struct Cli {
    /// Input AST file or directory.
    input: PathBuf,

    /// Output file or directory. Prints to stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show generated code without writing files.
    #[arg(long)]
    dry_run: bool,

    /// Show a line diff of input vs generated output. Implies --dry-run.
    #[arg(long)]
    show_diff: bool,

    /// Rules to apply, in order. Defaults to all compiled-in rules.
    #[arg(long, value_delimiter = ',')]
    rules: Option<Vec<String>>,

    /// Log level for tracing output.
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

/// Log level for tracing output.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Entry point
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    let rules = match active_rules(cli.rules.as_deref()) {
        Ok(rules) => rules,
        Err(unknown) => {
            error!(
                rule = unknown.as_str(),
                available = %rule_names().join(", "),
                "unknown rule name"
            );
            return ExitCode::from(2);
        }
    };

    if !cli.input.exists() {
        error!(input = %cli.input.display(), "input path does not exist");
        return ExitCode::from(2);
    }

    run(&cli, rules)
}

/// Initialize tracing subscriber.
fn init_tracing(level: LogLevel) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_tracing_level().to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Resolve the active rule list from `--rules`, defaulting to all.
fn active_rules(names: Option<&[String]>) -> Result<Vec<Box<dyn Rule>>, String> {
    match names {
        Some(names) => rules_by_name(names),
        None => Ok(default_rules()),
    }
}

/// Convert every discovered file, isolating per-file failures.
fn run(cli: &Cli, rules: Vec<Box<dyn Rule>>) -> ExitCode {
    let files = discover_inputs(&cli.input, INPUT_EXTENSION);
    if files.is_empty() {
        warn!(input = %cli.input.display(), "no input files found");
        return ExitCode::SUCCESS;
    }

    let base_dir = cli.input.is_dir().then(|| cli.input.as_path());
    let pipeline = Pipeline::new(JsonFrontend, rules);
    let outcomes = convert_files(&pipeline, &files);

    let mut failed = 0usize;
    for outcome in outcomes {
        let python = match outcome.result {
            Ok(python) => python,
            Err(err) => {
                failed += 1;
                error!(file = %outcome.input.display(), %err, "conversion failed");
                continue;
            }
        };
        if let Err(err) = emit(cli, base_dir, &outcome.input, &python) {
            failed += 1;
            error!(file = %outcome.input.display(), %err, "write failed");
        }
    }

    if failed > 0 {
        error!(failed, total = files.len(), "some files failed to convert");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Deliver one file's generated Python per the output flags.
fn emit(
    cli: &Cli,
    base_dir: Option<&std::path::Path>,
    input: &std::path::Path,
    python: &str,
) -> io::Result<()> {
    let stdout = io::stdout();

    if cli.show_diff {
        let original = fs::read_to_string(input)?;
        let mut handle = stdout.lock();
        writeln!(handle, "--- {}", input.display())?;
        write!(handle, "{}", render_diff(&original, python))?;
        return Ok(());
    }

    if cli.dry_run {
        let mut handle = stdout.lock();
        writeln!(handle, "# {}", input.display())?;
        write!(handle, "{python}")?;
        return Ok(());
    }

    match &cli.output {
        Some(out) => {
            let target = if base_dir.is_none() && out.extension().is_some() {
                // Single file to an explicit file path.
                out.clone()
            } else {
                output_path(input, base_dir, out)
            };
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, python)?;
            info!(file = %target.display(), "wrote output");
        }
        None => {
            let mut handle = stdout.lock();
            write!(handle, "{python}")?;
        }
    }
    Ok(())
}
