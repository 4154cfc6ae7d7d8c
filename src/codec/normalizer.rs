//! Header section normalization and validation.
//!
//! This is the single entry point through which raw header pairs become a
//! [`HeaderList`]. It does three jobs in one pass:
//!
//! 1. Converts names and values from whatever the tokenizer hands over
//!    (text or raw bytes) into one canonical byte representation. Nothing
//!    downstream ever re-inspects the original representation.
//! 2. Strips surrounding whitespace from values (names are kept byte-exact).
//! 3. Enforces the per-message framing invariants that the rest of the crate
//!    relies on without re-checking.
//!
//! # Why these checks are strict
//!
//! Message framing is where HTTP/1.x parsers get attacked. When two hops
//! disagree about where a body ends — because one honored a duplicate
//! Content-Length and the other didn't, or one saw whitespace before a colon
//! and the other folded it away — an attacker can smuggle a second request
//! inside the first. Every rejection here closes one of those gaps, so the
//! first violation aborts the whole call and no partial list is ever
//! returned.

use bytes::Bytes;
use tracing::trace;

use crate::ensure;
use crate::protocol::{HeaderField, HeaderList, ProtocolError};

/// Validates and canonicalizes a raw ordered header list.
///
/// Accepts any iterator of `(name, value)` pairs where both sides expose raw
/// bytes (`&str`, `String`, `&[u8]`, `Vec<u8>`, `Bytes`, ...). Output
/// preserves input order and every field that passed validation, values
/// whitespace-trimmed. Normalizing an already-normalized list returns an
/// identical list.
///
/// # Errors
///
/// Returns `ProtocolError` if:
/// - a header name carries surrounding whitespace. Whitespace between the
///   field name and the colon is illegal and a known request-smuggling
///   vector (RFC 9112 section 5.1 requires rejecting it outright)
/// - Content-Length appears more than once, even with equal values
/// - a Content-Length value is not a non-empty run of ASCII digits
/// - Transfer-Encoding appears more than once
/// - Transfer-Encoding has any value other than `chunked` (case-insensitive)
pub fn normalize<I, N, V>(raw: I) -> Result<HeaderList, ProtocolError>
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    let raw = raw.into_iter();
    let mut headers = HeaderList::with_capacity(raw.size_hint().0);

    let mut saw_content_length = false;
    let mut saw_transfer_encoding = false;

    for (name, value) in raw {
        let name = Bytes::copy_from_slice(name.as_ref());
        let value = Bytes::copy_from_slice(value.as_ref().trim_ascii());

        ensure!(name.trim_ascii() == &name[..], ProtocolError::malformed_header_name(&name));

        if name.eq_ignore_ascii_case(b"content-length") {
            ensure!(!saw_content_length, ProtocolError::DuplicateContentLength);
            ensure!(is_digits(&value), ProtocolError::malformed_content_length(&value));
            saw_content_length = true;
        }

        if name.eq_ignore_ascii_case(b"transfer-encoding") {
            ensure!(!saw_transfer_encoding, ProtocolError::DuplicateTransferEncoding);
            ensure!(value.eq_ignore_ascii_case(b"chunked"), ProtocolError::unsupported_transfer_encoding(&value));
            saw_transfer_encoding = true;
        }

        headers.push(HeaderField::from_canonical(name, value));
    }

    trace!(fields = headers.len(), content_length = saw_content_length, transfer_encoding = saw_transfer_encoding, "normalized header section");

    Ok(headers)
}

/// A bounded scan beats a regex for a fixed single-format check: no pattern
/// engine to pull in, no pathological inputs.
fn is_digits(value: &[u8]) -> bool {
    !value.is_empty() && value.iter().all(u8::is_ascii_digit)
}
