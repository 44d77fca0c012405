use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use filemeta::config::{Config, OutputFormat};
use filemeta::utils::formatter::{format_report, to_pretty_json};
use filemeta::{logging, ui, FileMetadataHandler};
use std::ffi::OsString;
use std::path::PathBuf;

/// Report metadata and the SHA-256 checksum of a single file.
#[derive(Parser, Debug)]
#[command(name = "filemeta", version)]
struct Args {
    /// File to inspect.
    path: OsString,

    /// Size unit: bit, byte, kilobyte, megabyte or gigabyte (singular or plural).
    #[arg(long, short, env = "FILEMETA_UNIT")]
    unit: Option<String>,

    /// Output format. Defaults to the config file's value, else text.
    #[arg(long, short, value_enum)]
    format: Option<OutputFormat>,

    /// Skip hashing the file contents.
    #[arg(long)]
    no_checksum: bool,

    /// Show the report in a full-screen terminal view.
    #[arg(long, conflicts_with = "format")]
    tui: bool,

    /// Config file to use instead of the default location.
    #[arg(long, env = "FILEMETA_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    let config = match args.config.or_else(Config::default_path) {
        Some(path) => Config::load(&path).map_err(anyhow::Error::msg)?,
        None => Config::default(),
    };
    tracing::debug!(?config, "configuration loaded");

    let handler = FileMetadataHandler::new(&args.path)
        .with_context(|| format!("cannot inspect {}", args.path.to_string_lossy()))?;

    let unit = args.unit.unwrap_or(config.default_unit);
    let with_checksum = config.checksum && !args.no_checksum;
    let report = handler
        .metadata(Some(&unit), with_checksum)
        .await
        .with_context(|| format!("cannot inspect {}", args.path.to_string_lossy()))?;

    if args.tui {
        ui::run(&report).context("terminal view failed")?;
        return Ok(());
    }

    match args.format.unwrap_or(config.format) {
        OutputFormat::Text => {
            if let Some(size) = report.size.as_ref().filter(|s| s.is_advisory()) {
                eprintln!("{}", size.to_string().yellow());
            }
            println!("{}", format_report(&report));
        }
        OutputFormat::Json => {
            println!("{}", to_pretty_json(&report).map_err(anyhow::Error::msg)?);
        }
    }

    Ok(())
}
