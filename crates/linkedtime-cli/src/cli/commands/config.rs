//! `linkedtime config` – show where settings live and what is in effect.

use anyhow::Result;
use linkedtime_core::config::{self, LinkedTimeConfig};

pub fn run_config(cfg: &LinkedTimeConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
