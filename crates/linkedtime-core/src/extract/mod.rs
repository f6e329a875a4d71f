//! Creation-time extraction from LinkedIn post and comment URLs.
//!
//! LinkedIn ids are snowflake-style: the top 41 bits of the decimal id hold
//! the creation time in epoch milliseconds. The pipeline is
//! locate (URL → digits), decode (digits → millis), format (millis → strings).
//! Everything here is a pure function of its arguments plus, for
//! [`extract`], the machine's time zone.

mod decode;
mod error;
mod format;
mod locate;

pub use decode::{decode_timestamp, TIMESTAMP_BITS};
pub use error::ExtractError;
pub use format::{format_ambient, format_in_zone, format_local, format_utc, local_offset_at};
pub use locate::{locate_identifier, Identifier, IdentifierSource};

use chrono::FixedOffset;
use serde::Serialize;

/// Creation time of a post or comment, rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostTime {
    /// RFC 1123, always GMT.
    pub utc_time: String,
    /// Local date and time with a short zone label.
    pub local_time: String,
}

impl PostTime {
    /// Renders `millis` in UTC and in `offset`, or in the machine's zone when `None`.
    pub fn from_millis(millis: u64, offset: Option<FixedOffset>) -> Result<Self, ExtractError> {
        let local_time = match offset {
            Some(o) => format_local(millis, o)?,
            None => format_ambient(millis)?,
        };
        Ok(Self {
            utc_time: format_utc(millis)?,
            local_time,
        })
    }
}

/// Locates and decodes the identifier in `url`, returning epoch milliseconds.
pub fn decode_url(url: &str) -> Result<u64, ExtractError> {
    let id = locate_identifier(url).inspect_err(|e| tracing::debug!("locate failed: {:?}", e))?;
    tracing::debug!(source = ?id.source, digits = %id.digits, "located identifier");

    let millis = decode_timestamp(&id.digits)
        .inspect_err(|e| tracing::debug!("decode failed for {}: {:?}", id.digits, e))?;
    tracing::debug!(millis, "decoded timestamp");
    Ok(millis)
}

/// Extracts the creation time from `url`, local time in the machine's zone.
///
/// # Examples
///
/// - `extract("https://www.linkedin.com/posts/x-activity-7033253973129029632-AbCd")`
///   → `utc_time == "Mon, 20 Feb 2023 02:00:18 GMT"`
/// - `extract("https://example.com/")` → `Err(ExtractError::InvalidUrl)`
pub fn extract(url: &str) -> Result<PostTime, ExtractError> {
    PostTime::from_millis(decode_url(url)?, None)
}

/// Like [`extract`], with local time rendered in `offset`.
pub fn extract_with_offset(url: &str, offset: FixedOffset) -> Result<PostTime, ExtractError> {
    PostTime::from_millis(decode_url(url)?, Some(offset))
}
