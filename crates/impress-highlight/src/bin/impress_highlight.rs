//! impress-highlight CLI
//!
//! Highlights a phrase in text read from `--text` or stdin and prints either
//! marked-up text or the raw segments as JSON.

use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use impress_highlight::{highlight_segments_with, render_markup, HighlightConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "impress-highlight", version, about = "Highlight search terms in text")]
struct Cli {
    /// Space-separated terms to highlight
    #[arg(short, long)]
    phrase: String,

    /// Text to search; read from stdin when omitted
    #[arg(short, long)]
    text: Option<String>,

    /// Segment the full text without cropping
    #[arg(long)]
    original: bool,

    /// Print segments as JSON instead of marked-up text
    #[arg(long)]
    json: bool,

    /// Marker inserted before each match
    #[arg(long, default_value = "<b>")]
    open: String,

    /// Marker inserted after each match
    #[arg(long, default_value = "</b>")]
    close: String,

    /// TOML file overriding the cropping configuration
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => HighlightConfig::load(path)?,
        None => HighlightConfig::default(),
    };

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let segments = highlight_segments_with(&text, &cli.phrase, cli.original, &config);
    tracing::debug!("Produced {} segment(s)", segments.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        println!("{}", render_markup(&segments, &cli.open, &cli.close));
    }

    Ok(())
}
