//! Locate the identifier embedded in a LinkedIn URL.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::ExtractError;

/// Substring every accepted URL must contain.
const LINKEDIN_MARKER: &str = "linkedin.com/";

static COMMENT_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"fsd_comment:\(([0-9]+),urn:li:activity:[0-9]+\)")
        .expect("comment-id pattern is valid")
});

/// 19 consecutive digits, the width of a post id; may sit inside a longer run.
static POST_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{19}").expect("post-id pattern is valid"));

/// Which part of the URL the identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierSource {
    /// `fsd_comment:(<id>,urn:li:activity:<id>)` fragment.
    Comment,
    /// Bare 19-digit run, usually the activity id in the path.
    Post,
}

/// Decimal identifier located in a URL, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub digits: String,
    pub source: IdentifierSource,
}

/// Finds the identifier to decode in `url`.
///
/// A comment fragment (matched on the percent-decoded URL) wins over post ids.
/// Otherwise the last 19-digit match in the raw URL is used.
pub fn locate_identifier(url: &str) -> Result<Identifier, ExtractError> {
    if !url.contains(LINKEDIN_MARKER) {
        return Err(ExtractError::InvalidUrl);
    }

    if let Some(digits) = comment_id(url) {
        return Ok(Identifier {
            digits,
            source: IdentifierSource::Comment,
        });
    }

    post_id(url)
        .map(|digits| Identifier {
            digits,
            source: IdentifierSource::Post,
        })
        .ok_or(ExtractError::NoIdentifierFound)
}

fn comment_id(url: &str) -> Option<String> {
    let decoded = match urlencoding::decode(url) {
        Ok(d) => d,
        Err(e) => {
            tracing::debug!("url is not valid utf-8 after percent-decoding: {}", e);
            return None;
        }
    };
    COMMENT_ID
        .captures(&decoded)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn post_id(url: &str) -> Option<String> {
    POST_ID
        .find_iter(url)
        .last()
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_linkedin() {
        assert_eq!(
            locate_identifier("https://example.com/posts/7033253973129029632"),
            Err(ExtractError::InvalidUrl)
        );
        assert_eq!(locate_identifier(""), Err(ExtractError::InvalidUrl));
        // Host without the trailing slash is not enough.
        assert_eq!(
            locate_identifier("https://www.linkedin.com"),
            Err(ExtractError::InvalidUrl)
        );
    }

    #[test]
    fn post_id_from_path() {
        let id = locate_identifier(
            "https://www.linkedin.com/posts/someone_title-activity-7033253973129029632-AbCd",
        )
        .unwrap();
        assert_eq!(id.digits, "7033253973129029632");
        assert_eq!(id.source, IdentifierSource::Post);
    }

    #[test]
    fn post_id_takes_last_run() {
        let id = locate_identifier(
            "https://www.linkedin.com/feed/update/urn:li:activity:7000000000000000001/?x=7033253973129029632",
        )
        .unwrap();
        assert_eq!(id.digits, "7033253973129029632");
    }

    #[test]
    fn short_runs_are_ignored() {
        assert_eq!(
            locate_identifier("https://www.linkedin.com/posts/703325397312902963"),
            Err(ExtractError::NoIdentifierFound)
        );
    }

    #[test]
    fn longer_run_yields_its_leading_19_digits() {
        let id = locate_identifier("https://www.linkedin.com/posts/x-activity-70332539731290296321")
            .unwrap();
        assert_eq!(id.digits, "7033253973129029632");
        assert_eq!(id.source, IdentifierSource::Post);
    }

    #[test]
    fn comment_fragment_wins() {
        let url = "https://www.linkedin.com/feed/update/urn:li:activity:7033253973129029632?commentUrn=urn%3Ali%3Acomment%3A%28activity%3A7033253973129029632%2C7033300000000000000%29&dashCommentUrn=urn%3Ali%3Afsd_comment%3A%287033300000000000000%2Curn%3Ali%3Aactivity%3A7033253973129029632%29";
        let id = locate_identifier(url).unwrap();
        assert_eq!(id.digits, "7033300000000000000");
        assert_eq!(id.source, IdentifierSource::Comment);
    }

    #[test]
    fn comment_fragment_unencoded() {
        let url = "https://www.linkedin.com/feed/update/x?dashCommentUrn=urn:li:fsd_comment:(123,urn:li:activity:456)";
        let id = locate_identifier(url).unwrap();
        assert_eq!(id.digits, "123");
        assert_eq!(id.source, IdentifierSource::Comment);
    }

    #[test]
    fn bad_percent_encoding_falls_back_to_post_id() {
        // %FF does not decode to utf-8.
        let url = "https://www.linkedin.com/posts/activity-7033253973129029632?x=%FF";
        let id = locate_identifier(url).unwrap();
        assert_eq!(id.source, IdentifierSource::Post);
        assert_eq!(id.digits, "7033253973129029632");
    }

    #[test]
    fn nothing_to_find() {
        assert_eq!(
            locate_identifier("https://www.linkedin.com/in/someone/"),
            Err(ExtractError::NoIdentifierFound)
        );
    }
}
