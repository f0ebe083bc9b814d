#![forbid(unsafe_code)]

//! pathdata CLI - format, inspect and validate SVG path data.
//!
//! # Commands
//!
//! - `format`: Parse path data and print its canonical form
//! - `inspect`: List the parsed commands, as text or JSON
//! - `validate`: Check path data and report the first error
//! - `map`: Rewrite every command to its absolute or relative letter

use std::fmt::Write as _;
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pd_core::{Command as PathCommand, PathData, PathDataError, SvgAttribute};
use pd_parser::{ParseConfig, parse_with_config};
use serde::Serialize;
use tracing::{debug, info};

/// pathdata CLI - format, inspect and validate SVG path data.
#[derive(Debug, Parser)]
#[command(
    name = "pd-cli",
    version,
    about = "pathdata CLI - format, inspect and validate SVG path data"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging (can be repeated for more detail: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Accept commas between parameters
    #[arg(long, global = true)]
    lenient: bool,

    /// Reject input with more commands than this
    #[arg(long, global = true)]
    max_commands: Option<usize>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse path data and print it in canonical form.
    Format {
        /// Input file path, "-" for stdin, or inline path data.
        #[arg(default_value = "-")]
        input: String,

        /// Output file path. If omitted, writes to stdout.
        #[arg(short, long)]
        output: Option<String>,

        /// Wrap the result as a `d="..."` attribute
        #[arg(long)]
        attribute: bool,
    },

    /// List parsed commands in textual order.
    Inspect {
        /// Input file path, "-" for stdin, or inline path data.
        #[arg(default_value = "-")]
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Validate path data and report diagnostics.
    Validate {
        /// Input file path, "-" for stdin, or inline path data.
        #[arg(default_value = "-")]
        input: String,

        /// Output as JSON (structured diagnostics)
        #[arg(long)]
        json: bool,
    },

    /// Swap every command for its absolute or relative counterpart letter.
    Map {
        /// Input file path, "-" for stdin, or inline path data.
        #[arg(default_value = "-")]
        input: String,

        /// Target letter case
        #[arg(long, value_enum)]
        to: MapTarget,

        /// Output file path. If omitted, writes to stdout.
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Target for the `map` command.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum MapTarget {
    /// Uppercase (absolute) letters
    Absolute,
    /// Lowercase (relative) letters
    Relative,
}

/// One row of `inspect` output.
#[derive(Debug, Serialize)]
struct CommandSummary {
    index: usize,
    code: char,
    name: &'static str,
    relative: bool,
    params: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct InspectResult {
    attribute: &'static str,
    command_count: usize,
    canonical: String,
    commands: Vec<CommandSummary>,
}

#[derive(Debug, Serialize)]
struct ValidateResult {
    valid: bool,
    command_count: usize,
    parse_time_ms: f64,
    error: Option<ValidationError>,
}

#[derive(Debug, Serialize)]
struct ValidationError {
    code: String,
    message: String,
    offset: Option<usize>,
}

impl From<&PathDataError> for ValidationError {
    fn from(err: &PathDataError) -> Self {
        Self {
            code: err.code().as_str().to_string(),
            message: err.to_string(),
            offset: err.offset(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let config = parse_config(cli.lenient, cli.max_commands);
    debug!(?config, "parser configuration");

    match cli.command {
        Command::Format {
            input,
            output,
            attribute,
        } => cmd_format(&input, &config, output.as_deref(), attribute),

        Command::Inspect {
            input,
            json,
            pretty,
        } => cmd_inspect(&input, &config, json, pretty),

        Command::Validate { input, json } => cmd_validate(&input, &config, json),

        Command::Map { input, to, output } => cmd_map(&input, &config, to, output.as_deref()),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

fn parse_config(lenient: bool, max_commands: Option<usize>) -> ParseConfig {
    let config = if lenient {
        ParseConfig::lenient()
    } else {
        ParseConfig::strict()
    };
    match max_commands {
        Some(limit) => config.with_max_commands(limit),
        None => config,
    }
}

fn load_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else if Path::new(input).exists() {
        std::fs::read_to_string(input).context(format!("Failed to read file: {input}"))
    } else {
        // Treat as inline path data
        Ok(input.to_string())
    }
}

fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{content}\n"))
                .context(format!("Failed to write to: {path}"))?;
            info!("Wrote output to: {path}");
        }
        None => emit(&mut io::stdout().lock(), content)?,
    }
    Ok(())
}

fn emit(writer: &mut impl Write, content: &str) -> Result<()> {
    writeln!(writer, "{content}").context("Failed to write to stdout")?;
    writer.flush().context("Failed to flush stdout")
}

fn load_path(input: &str, config: &ParseConfig) -> Result<PathData> {
    let source = load_input(input)?;
    let start = Instant::now();
    let path = parse_with_config(&source, config).context("Failed to parse path data")?;
    debug!(
        "Parsed {} commands in {:.3}ms",
        path.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(path)
}

// =============================================================================
// Command: format
// =============================================================================

fn cmd_format(
    input: &str,
    config: &ParseConfig,
    output: Option<&str>,
    attribute: bool,
) -> Result<()> {
    let path = load_path(input, config)?;
    let rendered = if attribute {
        format!("{}=\"{}\"", path.name(), path.value())
    } else {
        path.to_string()
    };
    write_output(output, &rendered)
}

// =============================================================================
// Command: inspect
// =============================================================================

fn cmd_inspect(input: &str, config: &ParseConfig, json_output: bool, pretty: bool) -> Result<()> {
    let path = load_path(input, config)?;
    let result = inspect(&path);

    let output = if json_output && pretty {
        serde_json::to_string_pretty(&result)?
    } else if json_output {
        serde_json::to_string(&result)?
    } else {
        inspect_text(&result)
    };
    write_output(None, &output)
}

fn inspect_text(result: &InspectResult) -> String {
    let mut out = format!("Commands: {}", result.command_count);
    for summary in &result.commands {
        let params = summary
            .params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let _ = write!(
            out,
            "\n  {:>4}  {}  {:<20} {}",
            summary.index, summary.code, summary.name, params
        );
    }
    out
}

fn inspect(path: &PathData) -> InspectResult {
    let commands = path
        .commands()
        .iter()
        .enumerate()
        .map(|(index, command)| CommandSummary {
            index,
            code: command.code(),
            name: command.kind().name(),
            relative: command.kind().is_relative(),
            params: command.params().to_vec(),
        })
        .collect();

    InspectResult {
        attribute: PathData::ATTRIBUTE_NAME,
        command_count: path.len(),
        canonical: path.to_string(),
        commands,
    }
}

// =============================================================================
// Command: validate
// =============================================================================

fn cmd_validate(input: &str, config: &ParseConfig, json_output: bool) -> Result<()> {
    let source = load_input(input)?;

    let start = Instant::now();
    let parsed = parse_with_config(&source, config);
    let parse_time = start.elapsed();

    let result = ValidateResult {
        valid: parsed.is_ok(),
        command_count: parsed.as_ref().map_or(0, PathData::len),
        parse_time_ms: parse_time.as_secs_f64() * 1000.0,
        error: parsed.as_ref().err().map(ValidationError::from),
    };

    let output = if json_output {
        serde_json::to_string_pretty(&result)?
    } else {
        validate_text(&result)
    };
    write_output(None, &output)?;

    if !result.valid {
        std::process::exit(1);
    }

    Ok(())
}

fn validate_text(result: &ValidateResult) -> String {
    match &result.error {
        Some(err) => {
            let location = err
                .offset
                .map_or_else(String::new, |offset| format!(" (byte {offset})"));
            format!(
                "✗ Invalid path data\n  [{}] {}{}",
                err.code, err.message, location
            )
        }
        None => format!("✓ Valid path data\n  Commands: {}", result.command_count),
    }
}

// =============================================================================
// Command: map
// =============================================================================

fn cmd_map(
    input: &str,
    config: &ParseConfig,
    target: MapTarget,
    output: Option<&str>,
) -> Result<()> {
    let mut path = load_path(input, config)?;
    map_codes(&mut path, target)?;
    write_output(output, &path.to_string())
}

/// Swap letters only; coordinates are not recomputed.
fn map_codes(path: &mut PathData, target: MapTarget) -> Result<(), PathDataError> {
    path.try_transform(|command: PathCommand| {
        let kind = match target {
            MapTarget::Absolute => command.kind().to_absolute(),
            MapTarget::Relative => command.kind().to_relative(),
        };
        if kind == command.kind() {
            Ok(command)
        } else {
            command.into_kind(kind)
        }
    })
}
