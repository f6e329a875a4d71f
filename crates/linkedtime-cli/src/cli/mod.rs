//! CLI for LinkedTime.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use linkedtime_core::config::{self, LinkedTimeConfig};
use linkedtime_core::ExtractError;

use commands::{run_completions, run_config, run_decode, run_extract, ExtractArgs};

/// Top-level CLI for LinkedTime.
#[derive(Debug, Parser)]
#[command(name = "linkedtime")]
#[command(about = "LinkedTime: find when a LinkedIn post or comment was published", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract the posting time from a LinkedIn post or comment URL.
    Extract {
        /// Full LinkedIn URL, as copied from the browser or the share menu.
        url: String,

        /// Print a JSON object instead of text.
        #[arg(long)]
        json: bool,

        /// Render local time in this fixed offset (e.g. +02:00) instead of the system zone.
        #[arg(long, value_name = "OFFSET", allow_hyphen_values = true)]
        utc_offset: Option<String>,

        /// Pause this many milliseconds before extracting (overrides config).
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,
    },

    /// Decode a bare post or comment identifier.
    Decode {
        /// Decimal identifier, e.g. 7033253973129029632.
        id: String,

        /// Print a JSON object instead of text.
        #[arg(long)]
        json: bool,

        /// Render local time in this fixed offset (e.g. +02:00) instead of the system zone.
        #[arg(long, value_name = "OFFSET", allow_hyphen_values = true)]
        utc_offset: Option<String>,
    },

    /// Show the config file path and effective settings.
    Config,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Extract {
                url,
                json,
                utc_offset,
                delay_ms,
            } => {
                let cfg = load_config()?;
                let args = ExtractArgs {
                    url,
                    json,
                    utc_offset,
                    delay_ms,
                };
                run_extract(&cfg, &args).await?
            }
            CliCommand::Decode {
                id,
                json,
                utc_offset,
            } => run_decode(&load_config()?, &id, json, utc_offset.as_deref())?,
            CliCommand::Config => run_config(&load_config()?)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

fn load_config() -> Result<LinkedTimeConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

/// Text printed on stderr for a failed command.
///
/// Extraction failures print their own message; anything else is prefixed
/// and shows its full context chain.
pub fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ExtractError>() {
        Some(e) => e.to_string(),
        None => format!("linkedtime error: {:#}", err),
    }
}

#[cfg(test)]
mod tests;
