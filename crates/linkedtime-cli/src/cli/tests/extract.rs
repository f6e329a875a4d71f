//! Tests for the extract subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

const URL: &str = "https://www.linkedin.com/posts/x-activity-7033253973129029632-abcd";

#[test]
fn cli_parse_extract() {
    match parse(&["linkedtime", "extract", URL]) {
        CliCommand::Extract {
            url,
            json,
            utc_offset,
            delay_ms,
        } => {
            assert_eq!(url, URL);
            assert!(!json);
            assert!(utc_offset.is_none());
            assert!(delay_ms.is_none());
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_extract_all_flags() {
    match parse(&[
        "linkedtime",
        "extract",
        URL,
        "--json",
        "--utc-offset",
        "-05:00",
        "--delay-ms",
        "1000",
    ]) {
        CliCommand::Extract {
            url,
            json,
            utc_offset,
            delay_ms,
        } => {
            assert_eq!(url, URL);
            assert!(json);
            assert_eq!(utc_offset.as_deref(), Some("-05:00"));
            assert_eq!(delay_ms, Some(1000));
        }
        _ => panic!("expected Extract with flags"),
    }
}

#[test]
fn cli_parse_extract_offset_with_equals() {
    match parse(&["linkedtime", "extract", URL, "--utc-offset=+05:30"]) {
        CliCommand::Extract { utc_offset, .. } => {
            assert_eq!(utc_offset.as_deref(), Some("+05:30"))
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_extract_requires_url() {
    assert!(Cli::try_parse_from(["linkedtime", "extract"]).is_err());
}

#[test]
fn cli_parse_extract_rejects_bad_delay() {
    assert!(Cli::try_parse_from(["linkedtime", "extract", URL, "--delay-ms", "soon"]).is_err());
}
