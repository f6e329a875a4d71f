use anyhow::{anyhow, Context, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How the CLI prints a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/linkedtime/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkedTimeConfig {
    /// Pause before extracting, in milliseconds (0 = none).
    #[serde(default)]
    pub extract_delay_ms: u64,
    /// Fixed UTC offset such as "+02:00" used for local time instead of the system zone.
    #[serde(default)]
    pub utc_offset: Option<String>,
    /// Output format: "text" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
}

impl LinkedTimeConfig {
    pub fn extract_delay(&self) -> Duration {
        Duration::from_millis(self.extract_delay_ms)
    }

    /// Parsed `utc_offset`, or `None` to use the system zone.
    pub fn fixed_offset(&self) -> Result<Option<FixedOffset>> {
        self.utc_offset
            .as_deref()
            .map(parse_utc_offset)
            .transpose()
    }
}

/// Parses `+HH:MM`, `-HH:MM`, `+HH`, `-HH` or `Z` into a fixed offset.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("z") || s.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| anyhow!("invalid utc offset"));
    }

    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(anyhow!("utc offset must start with + or -: {:?}", s)),
    };
    let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
    let hours: i32 = hours
        .parse()
        .with_context(|| format!("invalid hours in utc offset {:?}", s))?;
    let minutes: i32 = minutes
        .parse()
        .with_context(|| format!("invalid minutes in utc offset {:?}", s))?;
    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(anyhow!("utc offset out of range: {:?}", s));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| anyhow!("utc offset out of range: {:?}", s))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkedtime")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`, rejecting an unparseable `utc_offset`.
pub fn load_from(path: &Path) -> Result<LinkedTimeConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: LinkedTimeConfig = toml::from_str(&data)
        .with_context(|| format!("parsing config {}", path.display()))?;
    cfg.fixed_offset()?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkedTimeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LinkedTimeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}
