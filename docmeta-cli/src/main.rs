//! docmeta: build legacy page metadata from JSON inputs.
//!
//! Usage:
//!   docmeta --docset docset.toml --page intro.json --format output --pretty
//!
//! Reads a docset configuration and one page bundle, prints the resulting
//! metadata as JSON on stdout. Logs go to stderr.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use docmeta_cli::{OutputFormat, load_bundle, load_docset, render, to_json};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "docmeta")]
#[command(about = "Build legacy raw and output metadata for a documentation page")]
struct Args {
    /// Docset configuration (.toml or .json)
    #[arg(short, long)]
    docset: PathBuf,

    /// Page bundle JSON (page model, content, document, manifest output, toc)
    #[arg(short, long)]
    page: PathBuf,

    /// Which metadata to print
    #[arg(short, long, value_enum, default_value = "both")]
    format: OutputFormat,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let docset = load_docset(&args.docset)?;
    let bundle = load_bundle(&args.page)?;
    info!(
        depot = %docset.config.depot_name(),
        file = %bundle.document.file_path,
        "Building page metadata"
    );

    let rendered = render(&docset, &bundle, args.format)?;
    println!("{}", to_json(&rendered, args.pretty)?);
    Ok(())
}
