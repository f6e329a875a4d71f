//! Error kinds returned by the extractor.

use thiserror::Error;

/// Why a URL could not be turned into a post time.
///
/// The `Display` text is the message shown to the user; each kind has its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Input does not look like a LinkedIn URL.
    #[error("Please enter a valid LinkedIn URL.")]
    InvalidUrl,
    /// Neither a comment id nor a 19-digit post id was found.
    #[error("Could not extract a valid ID from the URL.")]
    NoIdentifierFound,
    /// An identifier was found but does not decode to a timestamp.
    #[error("Could not calculate timestamp from the URL. It may be an invalid post or comment link.")]
    TimestampDecodeError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_distinct() {
        let a = ExtractError::InvalidUrl.to_string();
        let b = ExtractError::NoIdentifierFound.to_string();
        let c = ExtractError::TimestampDecodeError.to_string();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }
}
