//! Print or write the OpenAPI document as JSON.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), forbid(clippy::expect_used))]

use std::io::Write as _;
use std::path::{Path, PathBuf};

use backend::doc::ApiDoc;
use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use utoipa::OpenApi;

/// `openapi-dump` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "openapi-dump",
    about = "Render the brand studio OpenAPI document",
    version
)]
struct CliArgs {
    /// Write the document to this file instead of standard output.
    #[arg(long, value_name = "path")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let document = ApiDoc::openapi()
        .to_pretty_json()
        .wrap_err("serialise OpenAPI document")?;

    match args.output {
        Some(path) => write_document(&path, &document),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{document}").wrap_err("write OpenAPI document to stdout")
        }
    }
}

fn write_document(path: &Path, document: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("output path '{}' has no file name", path.display()))?;
    let directory = Dir::open_ambient_dir(parent, ambient_authority())
        .wrap_err_with(|| format!("open output directory '{}'", parent.display()))?;
    directory
        .write(file_name, document)
        .wrap_err_with(|| format!("write OpenAPI document to '{}'", path.display()))
}
