//! Decode the timestamp field of a snowflake-style identifier.

use num_bigint::BigUint;

use super::ExtractError;

/// Width of the timestamp field at the top of an identifier.
pub const TIMESTAMP_BITS: u32 = 41;

/// Returns the epoch milliseconds held in the leading 41 bits of `digits`.
///
/// `digits` is an unsigned decimal integer of any length. Values with 41 or
/// fewer significant bits are returned as-is. Anything that is not plain
/// ASCII digits is a `TimestampDecodeError`.
///
/// # Examples
///
/// - `decode_timestamp("7033253973129029632")` → `Ok(1676858418733)`
pub fn decode_timestamp(digits: &str) -> Result<u64, ExtractError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExtractError::TimestampDecodeError);
    }
    let value =
        BigUint::parse_bytes(digits.as_bytes(), 10).ok_or(ExtractError::TimestampDecodeError)?;

    let shift = value.bits().saturating_sub(u64::from(TIMESTAMP_BITS));
    // At most 41 bits remain after the shift.
    u64::try_from(&(value >> shift)).map_err(|_| ExtractError::TimestampDecodeError)
}
