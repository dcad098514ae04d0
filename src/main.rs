use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser as CliParser;
use tracing_subscriber::EnvFilter;

use parsley::json::document;
use parsley::parse;
use parsley::result::ResultExt;

const SAMPLE: &str = r#"{ "a": [1, -23.4], "b\nc\"\\": true }"#;

/// Parse a JSON document and print it back in minified form
#[derive(Debug, clap::Parser)]
#[command(name = "parsley", version)]
struct Cli {
    /// JSON text to parse; a built-in sample is used when omitted
    input: Option<String>,

    /// Read the JSON text from a file instead
    #[arg(short, long, conflicts_with = "input")]
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let input = match (cli.input, cli.file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        (None, None) => SAMPLE.to_string(),
    };

    parse(&document(), &input).fold(
        |value| {
            println!("{value}");
            Ok(())
        },
        |error| Err(anyhow::Error::new(error).context("input is not valid JSON")),
    )
}
