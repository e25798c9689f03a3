//! `vidlink batch <PATH|->` – resolve a list of links, one per line.

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use vidlink_core::config::OutputFormat;
use vidlink_core::video;

use crate::cli::output;

/// Reads the whole list from `path`, or stdin when `path` is `-`.
async fn read_links(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("read links from stdin")?;
        Ok(buf)
    } else {
        tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read links from {path}"))
    }
}

pub async fn run_batch(path: &str, format: OutputFormat, fail_on_unresolved: bool) -> Result<bool> {
    let text = read_links(path).await?;
    let report = video::resolve_batch(text.lines());

    for entry in &report.entries {
        let line = match format {
            OutputFormat::Json => output::batch_json_line(entry)?,
            OutputFormat::Text => output::batch_text_line(entry),
        };
        println!("{line}");
    }

    let summary = report.summary();
    tracing::info!(path, "batch resolved: {}", summary);
    eprintln!("{summary}");

    Ok(report.unresolved() == 0 || !fail_on_unresolved)
}
