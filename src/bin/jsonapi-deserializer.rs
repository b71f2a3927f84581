//! JSON:API Deserializer CLI
//!
//! Reads a JSON:API document and prints the denormalized plain JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jsonapi_deserializer::{deserialize, load_document_auto, DeserializerConfig};

#[derive(Parser)]
#[command(name = "jsonapi-deserializer")]
#[command(about = "Denormalize a JSON:API document into plain JSON")]
#[command(version)]
struct Cli {
    /// Document source: file path or URL (http:// or https://)
    input: String,

    /// Output file (stdout if not specified)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Fail after this many relationship levels instead of recursing
    /// forever on cyclic documents
    #[arg(long)]
    max_depth: Option<usize>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => ExitCode::from(code),
    }
}

async fn run(cli: Cli) -> Result<(), u8> {
    let document = load_document_auto(&cli.input).await.map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let mut config = DeserializerConfig::new();
    if let Some(limit) = cli.max_depth {
        config = config.with_max_depth(limit);
    }

    let resolved = deserialize(&document, &config).await.map_err(|e| {
        eprintln!("Error: {}", e);
        e.exit_code() as u8
    })?;

    let json_output = if cli.pretty {
        serde_json::to_string_pretty(&resolved)
    } else {
        serde_json::to_string(&resolved)
    }
    .map_err(|e| {
        eprintln!("Error serializing output: {}", e);
        2u8
    })?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &json_output).map_err(|e| {
                eprintln!("Error writing to {}: {}", path.display(), e);
                3u8
            })?;
        }
        None => {
            println!("{}", json_output);
        }
    }

    Ok(())
}
