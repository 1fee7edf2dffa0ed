//! CLI for gdfetch.

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use gdfetch_core::config;
use std::path::PathBuf;

use commands::run_download;

/// Printed to stdout (exit 0) when the link or output path is missing.
pub const USAGE: &str = "Usage: gdfetch [--config <PATH>] <sharing-link> <output-file-path>";

/// Download a file shared via a Google Drive link.
#[derive(Debug, Parser)]
#[command(name = "gdfetch", version)]
#[command(about = "Download a Google Drive shared file to disk", long_about = None)]
pub struct Cli {
    /// Google Drive sharing link (`/file/d/<ID>/...` or `...?id=<ID>`).
    pub link: Option<String>,

    /// Path of the file to create (truncated if it exists).
    pub output: Option<PathBuf>,

    /// Anything after the output path is ignored.
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Config file; defaults to ~/.config/gdfetch/config.toml when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let (link, output) = match (self.link, self.output) {
            (Some(link), Some(output)) => (link, output),
            _ => {
                println!("{}", USAGE);
                return Ok(());
            }
        };
        if !self.extra.is_empty() {
            tracing::warn!("ignoring extra arguments: {:?}", self.extra);
        }

        let cfg = config::load(self.config.as_deref()).context("failed to load config")?;
        tracing::debug!("loaded config: {:?}", cfg);

        run_download(&cfg, &link, &output)
    }
}
