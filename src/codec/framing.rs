//! Body framing resolution from a normalized header section.

use tracing::trace;

use crate::protocol::{BodyFraming, HeaderList, ProtocolError};

/// Derives the effective body framing for a message.
///
/// This function examines the Transfer-Encoding and Content-Length headers
/// to select the framing according to RFC 9112 section 6.3: when both are
/// present, Transfer-Encoding wins. The normalizer already rules out the
/// ambiguous shapes (duplicates, non-chunked encodings), but precedence
/// still matters here because presence of either header is independently
/// optional.
///
/// Precondition: `headers` came out of [`normalize`](crate::codec::normalize)
/// for the current message. A Transfer-Encoding that slipped past validation
/// (e.g. planted through [`HeaderList::set_comma_values`]) is an internal
/// invariant failure, not a protocol error, and trips a debug assertion.
///
/// # Errors
///
/// Returns `ProtocolError` if the Content-Length value does not fit in a
/// `u64`. The digits-only check does not bound magnitude, and a length that
/// overflows 64 bits does not describe a real body.
pub fn resolve_framing(headers: &HeaderList) -> Result<BodyFraming, ProtocolError> {
    let transfer_encodings = headers.comma_values("Transfer-Encoding", true);
    if !transfer_encodings.is_empty() {
        debug_assert_eq!(transfer_encodings, vec![&b"chunked"[..]], "non-chunked Transfer-Encoding bypassed normalization");
        trace!("framing: chunked");
        return Ok(BodyFraming::Chunked);
    }

    let content_lengths = headers.comma_values("Content-Length", true);
    if let Some(first) = content_lengths.first() {
        let length = std::str::from_utf8(first)
            .ok()
            .and_then(|digits| digits.parse::<u64>().ok())
            .ok_or_else(|| ProtocolError::malformed_content_length(first))?;
        trace!(length, "framing: fixed length");
        return Ok(BodyFraming::Length(length));
    }

    trace!("framing: none declared");
    Ok(BodyFraming::Unframed)
}

#[cfg(test)]
mod tests {
    use crate::codec::normalize;

    use super::*;

    #[test]
    fn chunked_when_transfer_encoding_present() {
        let headers = normalize([("Transfer-Encoding", "chunked")]).unwrap();
        assert_eq!(resolve_framing(&headers).unwrap(), BodyFraming::Chunked);
    }

    #[test]
    fn transfer_encoding_beats_content_length() {
        let headers = normalize([("Transfer-Encoding", "chunked"), ("Content-Length", "10")]).unwrap();
        assert_eq!(resolve_framing(&headers).unwrap(), BodyFraming::Chunked);
    }

    #[test]
    fn content_length_when_present_alone() {
        let headers = normalize([("Content-Length", "42")]).unwrap();

        let framing = resolve_framing(&headers).unwrap();
        assert_eq!(framing, BodyFraming::Length(42));
        assert_eq!(framing.content_length(), Some(42));
        assert!(!framing.is_chunked());
    }

    #[test]
    fn zero_length_body_is_still_framed() {
        let headers = normalize([("Content-Length", "0")]).unwrap();
        assert_eq!(resolve_framing(&headers).unwrap(), BodyFraming::Length(0));
    }

    #[test]
    fn unframed_when_neither_header_present() {
        let headers = normalize([("Host", "example.com")]).unwrap();
        assert!(resolve_framing(&headers).unwrap().is_unframed());

        let empty = normalize(std::iter::empty::<(&str, &str)>()).unwrap();
        assert!(resolve_framing(&empty).unwrap().is_unframed());
    }

    #[test]
    fn rejects_content_length_exceeding_u64() {
        // passes the digits-only check, overflows the parse
        let headers = normalize([("Content-Length", "99999999999999999999999999")]).unwrap();

        let err = resolve_framing(&headers).unwrap_err();
        assert!(matches!(err, crate::protocol::ProtocolError::MalformedContentLength { .. }));
    }
}
