//! Expect: 100-continue detection.

use http::Version;

use crate::protocol::HeaderList;

/// Returns whether a request asks for a `100 Continue` interim response
/// before sending its body.
///
/// A 100-continue expectation in an HTTP/1.0 request must be ignored
/// (RFC 9110 section 10.1.1), so anything below HTTP/1.1 is `false`
/// regardless of headers. The `100-continue` token itself is matched
/// case-sensitively.
pub fn expects_100_continue(version: Version, headers: &HeaderList) -> bool {
    if matches!(version, Version::HTTP_09 | Version::HTTP_10) {
        return false;
    }
    headers.comma_values("Expect", false).iter().any(|token| token.as_ref() == b"100-continue")
}

#[cfg(test)]
mod tests {
    use crate::codec::normalize;

    use super::*;

    #[test]
    fn detected_on_http11() {
        let headers = normalize([("Expect", "100-continue")]).unwrap();
        assert!(expects_100_continue(Version::HTTP_11, &headers));
    }

    #[test]
    fn ignored_on_http10() {
        let headers = normalize([("Expect", "100-continue")]).unwrap();
        assert!(!expects_100_continue(Version::HTTP_10, &headers));
    }

    #[test]
    fn token_match_is_case_sensitive() {
        let headers = normalize([("Expect", "100-Continue")]).unwrap();
        assert!(!expects_100_continue(Version::HTTP_11, &headers));
    }

    #[test]
    fn found_among_multiple_tokens() {
        let headers = normalize([("Expect", "something-else, 100-continue")]).unwrap();
        assert!(expects_100_continue(Version::HTTP_11, &headers));
    }

    #[test]
    fn absent_expect_header_means_no() {
        let headers = normalize([("Host", "example.com")]).unwrap();
        assert!(!expects_100_continue(Version::HTTP_11, &headers));
    }
}
