//! `linkedtime decode` – posting time from a bare identifier.

use anyhow::Result;
use linkedtime_core::config::{LinkedTimeConfig, OutputFormat};
use linkedtime_core::extract::decode_timestamp;
use linkedtime_core::PostTime;

use super::output::render_post_time;
use super::{resolve_format, resolve_offset};

pub fn run_decode(
    cfg: &LinkedTimeConfig,
    id: &str,
    json: bool,
    utc_offset: Option<&str>,
) -> Result<()> {
    let offset = resolve_offset(utc_offset, cfg)?;
    let millis = decode_timestamp(id.trim())?;
    tracing::info!("decode id={} millis={}", id, millis);
    let post_time = PostTime::from_millis(millis, offset)?;

    match resolve_format(json, cfg) {
        OutputFormat::Text => {
            println!("Epoch: {millis}");
            println!("{}", render_post_time(&post_time, OutputFormat::Text)?);
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&post_time)?;
            value["epoch_millis"] = millis.into();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}
