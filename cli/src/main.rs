use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use schema_args_core::{FlagSpec, ParseError};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// CLI-specific output format enum with clap argument parsing support.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "schema-args")]
#[command(about = "Derive and run command-line parsers from JSON-Schema documents")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse argument tokens with a parser derived from a schema document.
    Parse(ParseArgs),
    /// Show the flags a schema document derives.
    Inspect(InspectArgs),
    /// Show the generated usage/help text for a schema document.
    Usage(UsageArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Path to the JSON-Schema document (JSON or YAML).
    #[arg(long)]
    schema: PathBuf,
    /// Output format for the parsed values (default: json).
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
    /// Argument tokens for the generated parser (separate with `--`).
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Args)]
struct InspectArgs {
    /// Path to the JSON-Schema document (JSON or YAML).
    #[arg(long)]
    schema: PathBuf,
    /// Output format for the flag listing (default: json).
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct UsageArgs {
    /// Path to the JSON-Schema document (JSON or YAML).
    #[arg(long)]
    schema: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Usage(args) => run_usage(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let parser = load_parser(&args.schema)?;

    let values = match parser.parse(&args.args) {
        Ok(values) => values,
        // Let clap render missing-flag/unknown-flag/help output itself so
        // users get conventional usage text and exit codes.
        Err(ParseError::Usage(err)) => err.exit(),
        Err(err) => return Err(err.to_string()),
    };

    let rendered = render(&values, args.format)?;
    println!("{rendered}");
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<(), String> {
    let parser = load_parser(&args.schema)?;
    let summaries = flag_summaries(parser.flags());
    let rendered = render(&summaries, args.format)?;
    println!("{rendered}");
    Ok(())
}

fn run_usage(args: UsageArgs) -> Result<(), String> {
    let parser = load_parser(&args.schema)?;
    print!("{}", parser.render_help());
    Ok(())
}

fn load_parser(path: &Path) -> Result<schema_args_core::Parser, String> {
    let document = schema_args_core::load_data(path)
        .map_err(|err| format!("failed to load schema document: {err}"))?;
    schema_args_core::build(&document).map_err(|err| err.to_string())
}

/// Flat flag description for `inspect` output.
#[derive(Debug, Serialize)]
struct FlagSummary<'a> {
    property: &'a str,
    flag: String,
    #[serde(rename = "type")]
    type_name: &'a str,
    required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<&'a serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    choices: Option<&'a [serde_json::Value]>,
}

fn flag_summaries(flags: &[FlagSpec]) -> Vec<FlagSummary<'_>> {
    flags
        .iter()
        .map(|spec| FlagSummary {
            property: &spec.property,
            flag: format!("--{}", spec.flag),
            type_name: spec.coercion.type_name(),
            required: spec.required,
            help: spec.help.as_deref(),
            default: spec.default.as_ref(),
            choices: spec.choices.as_deref(),
        })
        .collect()
}

fn render<T: Serialize>(value: &T, format: CliOutputFormat) -> Result<String, String> {
    match format {
        CliOutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|err| format!("JSON serialization failed: {err}")),
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|err| format!("YAML serialization failed: {err}"))
        }
    }
}
