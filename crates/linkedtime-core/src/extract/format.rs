//! Render epoch milliseconds as UTC and local date strings.

use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use super::ExtractError;

/// RFC 1123 date, as HTTP and `Date.toUTCString` print it.
const UTC_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// `Feb 20, 2023, 03:00 AM`; the zone label is appended separately.
const LOCAL_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

fn to_datetime(millis: u64) -> Result<DateTime<Utc>, ExtractError> {
    i64::try_from(millis)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .ok_or(ExtractError::TimestampDecodeError)
}

/// Formats `millis` as an RFC 1123 UTC string, e.g. `Mon, 20 Feb 2023 02:00:18 GMT`.
pub fn format_utc(millis: u64) -> Result<String, ExtractError> {
    Ok(to_datetime(millis)?.format(UTC_FORMAT).to_string())
}

/// Formats `millis` in `offset` with a short zone label,
/// e.g. `Feb 20, 2023, 03:00 AM GMT+1`.
pub fn format_local(millis: u64, offset: FixedOffset) -> Result<String, ExtractError> {
    let local = to_datetime(millis)?.with_timezone(&offset);
    Ok(format!(
        "{} {}",
        local.format(LOCAL_FORMAT),
        zone_label(offset)
    ))
}

/// Formats `millis` in the named zone `tz`, labeled with the zone's
/// abbreviation, e.g. `Feb 19, 2023, 09:00 PM EST`.
///
/// Zones whose abbreviation is only a numeric offset (`+04`) get the
/// `GMT+4` style label instead.
pub fn format_in_zone(millis: u64, tz: &Tz) -> Result<String, ExtractError> {
    let local = to_datetime(millis)?.with_timezone(tz);
    let abbreviation = local.format("%Z").to_string();
    let label = if abbreviation.starts_with(['+', '-']) {
        zone_label(local.offset().fix())
    } else {
        abbreviation
    };
    Ok(format!("{} {}", local.format(LOCAL_FORMAT), label))
}

/// Formats `millis` in the machine's time zone.
///
/// Uses the IANA zone reported by the system when it is known to the zone
/// database, otherwise the machine's offset at that instant.
pub fn format_ambient(millis: u64) -> Result<String, ExtractError> {
    match system_zone() {
        Some(tz) => format_in_zone(millis, &tz),
        None => format_local(millis, local_offset_at(millis)?),
    }
}

fn system_zone() -> Option<Tz> {
    let name = match iana_time_zone::get_timezone() {
        Ok(name) => name,
        Err(e) => {
            tracing::debug!("system time zone unavailable: {}", e);
            return None;
        }
    };
    match name.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(e) => {
            tracing::debug!("unknown time zone {:?}: {}", name, e);
            None
        }
    }
}

/// Offset of the machine's time zone at the instant `millis`, so DST is honored.
pub fn local_offset_at(millis: u64) -> Result<FixedOffset, ExtractError> {
    let utc = to_datetime(millis)?;
    Ok(Local.offset_from_utc_datetime(&utc.naive_utc()).fix())
}

/// `UTC`, `GMT+1`, `GMT-5`, `GMT+5:30`.
fn zone_label(offset: FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    if secs == 0 {
        return "UTC".to_string();
    }
    let sign = if secs < 0 { '-' } else { '+' };
    let abs = secs.unsigned_abs();
    let hours = abs / 3600;
    let minutes = (abs % 3600) / 60;
    if minutes == 0 {
        format!("GMT{sign}{hours}")
    } else {
        format!("GMT{sign}{hours}:{minutes:02}")
    }
}
