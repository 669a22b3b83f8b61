// src/main.rs
// simcheck - plagiarism similarity checker

use anyhow::{bail, Result};
use clap::Parser;
use simcheck::checker::Checker;
use simcheck::config::EnvConfig;
use simcheck::source;
use std::path::PathBuf;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "simcheck")]
#[command(about = "Check a text against a reference document for similarity")]
#[command(version)]
struct Cli {
    /// Query text to check (omit when using --file)
    query: Option<String>,

    /// Read the query text from a file instead
    #[arg(short, long, conflicts_with = "query")]
    file: Option<PathBuf>,

    /// Reference document: a file path or an http(s) URL
    /// (falls back to SIMCHECK_REFERENCE)
    #[arg(short, long)]
    reference: Option<String>,

    /// Emit the report as JSON instead of the terminal gauge
    #[arg(long)]
    json: bool,

    /// Verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

async fn read_query(cli: &Cli) -> Result<String> {
    if let Some(ref path) = cli.file {
        return Ok(tokio::fs::read_to_string(path).await?);
    }
    if let Some(ref text) = cli.query {
        return Ok(text.clone());
    }
    bail!("no query given: pass text as an argument or use --file");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from the current directory, if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::INFO } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = EnvConfig::load();
    for warning in config.validate() {
        warn!("{}", warning);
    }

    let Some(reference) = cli.reference.clone().or_else(|| config.reference.clone()) else {
        bail!("no reference document: pass --reference or set SIMCHECK_REFERENCE");
    };

    let query = read_query(&cli).await?;

    let checker = Checker::new(source::for_spec(&reference));
    let report = checker.check(&query).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render(config.gauge_width));
    }

    Ok(())
}
