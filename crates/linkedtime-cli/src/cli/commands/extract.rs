//! `linkedtime extract` – posting time from a URL.

use anyhow::Result;
use linkedtime_core::config::LinkedTimeConfig;
use linkedtime_core::delayed::extract_after;
use std::time::Duration;

use super::output::render_post_time;
use super::{resolve_format, resolve_offset};

/// Arguments of the extract subcommand, flags still unresolved against config.
#[derive(Debug, Clone)]
pub struct ExtractArgs {
    pub url: String,
    pub json: bool,
    pub utc_offset: Option<String>,
    pub delay_ms: Option<u64>,
}

pub async fn run_extract(cfg: &LinkedTimeConfig, args: &ExtractArgs) -> Result<()> {
    let offset = resolve_offset(args.utc_offset.as_deref(), cfg)?;
    let format = resolve_format(args.json, cfg);
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| cfg.extract_delay());

    if !delay.is_zero() {
        eprintln!("Extracting...");
    }
    tracing::info!("extract url={}", args.url);
    let post_time = extract_after(&args.url, delay, offset).await?;

    println!("{}", render_post_time(&post_time, format)?);
    Ok(())
}
