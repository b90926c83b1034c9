//! `config-convert` CLI — convert a configuration file between YAML, JSON and TOML.
//!
//! ## Usage
//!
//! ```sh
//! # YAML → JSON
//! config-convert config.yaml config.json --input_format yaml --output_format json
//!
//! # TOML → YAML
//! config-convert config.toml config.yaml --input_format toml --output_format yaml
//!
//! # JSON → TOML
//! config-convert config.json config.toml --input_format json --output_format toml
//! ```
//!
//! Progress and failures are logged to stderr. Exits 0 on success, 1 on any
//! conversion error.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::Parser;
use config_convert::{Conversion, Format};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "config-convert",
    version,
    about = "Convert configuration files between common formats (YAML, JSON, TOML)."
)]
struct Cli {
    /// Path to the input configuration file
    input_file: PathBuf,

    /// Path to the output configuration file
    output_file: PathBuf,

    /// Format of the input file
    #[arg(
        long = "input_format",
        visible_alias = "input-format",
        value_parser = format_parser()
    )]
    input_format: Format,

    /// Format of the output file
    #[arg(
        long = "output_format",
        visible_alias = "output-format",
        value_parser = format_parser()
    )]
    output_format: Format,
}

/// Restricts the flag to the known tags so `--help` and usage errors list them.
fn format_parser() -> impl TypedValueParser<Value = Format> {
    PossibleValuesParser::new(Format::NAMES).try_map(|tag| tag.parse::<Format>())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(conversion) => {
            info!("Successfully converted {conversion}.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Conversion> {
    let conversion = Conversion::new(
        cli.input_file.clone(),
        cli.input_format,
        cli.output_file.clone(),
        cli.output_format,
    );
    conversion.run()?;
    Ok(conversion)
}

/// Timestamped, leveled log lines on stderr. The level is fixed at `info`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
