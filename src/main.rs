//! hdoc — generate Markdown documentation from an annotated C header.
//!
//! `hdoc lib/map.h` writes `docs/map.h.md`: the `//` comment block at the top
//! of the header (up to `___HEADER_END___`) followed by an `## API Docs`
//! section built from the `/** ... */` docblocks.

mod config;
mod error;
mod logger;
mod model;
mod parser;
mod render;

use anyhow::Result;
use clap::Parser;
use config::Config;
use error::HdocError;
use render::markdown::MarkdownRenderer;
use render::Renderer;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

/// Printed on stdout when no header is given.
const USAGE: &str = "Usage: python3 docs.py <header-file>";

#[derive(Parser)]
#[command(
    name = "hdoc",
    version,
    about = "Generate Markdown documentation from an annotated C header"
)]
struct Cli {
    /// Header file to document
    #[arg(allow_hyphen_values = true)]
    header: Option<PathBuf>,

    /// Anything after the header is accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    _rest: Vec<OsString>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(header) = cli.header else {
        println!("{USAGE}");
        process::exit(1);
    };

    logger::init_logger();

    let out_path = generate(&header, &Config::default())?;
    tracing::debug!(output = %out_path.display(), "done");
    Ok(())
}

/// Read `input`, extract its docs and write them under `config.output_dir`.
///
/// Returns the path written. An existing file at that path is overwritten.
fn generate(input: &Path, config: &Config) -> error::Result<PathBuf> {
    let content = fs::read_to_string(input).map_err(|source| HdocError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let doc = parser::parse(&content);
    tracing::debug!(
        preamble = doc.preamble.len(),
        records = doc.records.len(),
        "extracted"
    );

    let renderer = MarkdownRenderer;
    let out_path = config.output_path(input, renderer.file_extension())?;

    fs::write(&out_path, renderer.render(&doc)).map_err(|source| HdocError::Write {
        path: out_path.clone(),
        source,
    })?;

    Ok(out_path)
}
