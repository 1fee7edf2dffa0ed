//! `gdfetch <link> <output>`: translate the link, then stream the file to disk.

use anyhow::{Context, Result};
use gdfetch_core::config::GdfetchConfig;
use gdfetch_core::{fetch, link};
use std::path::Path;

pub fn run_download(cfg: &GdfetchConfig, share_link: &str, output: &Path) -> Result<()> {
    let url = link::direct_link_with_base(share_link, &cfg.download_base)
        .context("failed to get direct download link")?;
    tracing::debug!("resolved {} to {}", share_link, url);

    println!("Downloading file from: {}", url);
    let written = fetch::download_to_path(&url, output, &cfg.fetch_options())
        .context("failed to download file")?;
    tracing::info!("wrote {} bytes to {}", written, output.display());

    println!("File downloaded successfully to: {}", output.display());
    Ok(())
}
