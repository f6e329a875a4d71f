//! Asynchronous wrapper that pauses before extracting.
//!
//! The pause is a presentation affordance (a visible "extracting..." state);
//! the result is exactly what the synchronous extractor returns.

use std::time::Duration;

use chrono::FixedOffset;

use crate::extract::{decode_url, ExtractError, PostTime};

/// Waits `delay`, then extracts the post time from `url`.
///
/// `offset` selects the zone for local time; `None` uses the machine's zone.
pub async fn extract_after(
    url: &str,
    delay: Duration,
    offset: Option<FixedOffset>,
) -> Result<PostTime, ExtractError> {
    if !delay.is_zero() {
        tracing::debug!("delaying extraction by {:?}", delay);
        tokio::time::sleep(delay).await;
    }
    PostTime::from_millis(decode_url(url)?, offset)
}
