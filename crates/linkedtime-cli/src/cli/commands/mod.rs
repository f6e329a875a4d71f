//! CLI command handlers, one per file.

mod completions;
mod config;
mod decode;
mod extract;
mod output;

pub use completions::run_completions;
pub use config::run_config;
pub use decode::run_decode;
pub use extract::{run_extract, ExtractArgs};

use anyhow::Result;
use chrono::FixedOffset;
use linkedtime_core::config::{parse_utc_offset, LinkedTimeConfig, OutputFormat};

/// `--utc-offset` wins over the config file; `None` means the system zone.
pub(crate) fn resolve_offset(
    flag: Option<&str>,
    cfg: &LinkedTimeConfig,
) -> Result<Option<FixedOffset>> {
    match flag {
        Some(s) => Ok(Some(parse_utc_offset(s)?)),
        None => cfg.fixed_offset(),
    }
}

/// `--json` wins over the config file.
pub(crate) fn resolve_format(json: bool, cfg: &LinkedTimeConfig) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        cfg.output
    }
}
