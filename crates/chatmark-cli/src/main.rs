//! Developer inspector for the chatmark document model.
//!
//! Parses a message body and prints the block sequence as JSON, optionally
//! with the inline spans each text-bearing block tokenizes into. This is a
//! debugging surface for the engine's data contract, not a renderer.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chatmark_engine::{Block, InlineSpan, parse_message, tokenize_block};
use clap::Parser;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "chatmark", version, about = "Inspect parsed chat messages")]
struct Args {
    /// Path to a file holding the message body, or `-` for stdin.
    input: PathBuf,

    /// Include inline spans for text-bearing blocks.
    #[arg(long)]
    spans: bool,

    /// Print one-line JSON instead of pretty output.
    #[arg(long)]
    compact: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    blocks: Vec<Entry<'a>>,
}

#[derive(Serialize)]
struct Entry<'a> {
    block: &'a Block,
    #[serde(skip_serializing_if = "Option::is_none")]
    spans: Option<Vec<InlineSpan>>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env().init();

    let args = Args::parse();
    let body = read_input(&args.input)?;
    log::debug!("read {} bytes from {}", body.len(), args.input.display());

    let blocks = parse_message(&body);
    log::debug!("parsed {} blocks", blocks.len());

    let entries: Vec<Entry> = blocks
        .iter()
        .map(|block| Entry {
            spans: args
                .spans
                .then(|| tokenize_block(block))
                .filter(|spans| !spans.is_empty()),
            block,
        })
        .collect();

    let report = Report { blocks: entries };
    let json = if args.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{json}");

    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("reading message body from stdin")?;
        Ok(body)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading message body from {}", path.display()))
    }
}
