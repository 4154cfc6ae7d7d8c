/// The effective body framing of a single message.
///
/// This is what the surrounding protocol engine consumes to pick a body
/// reading strategy:
/// - Known length: read exactly that many bytes
/// - Chunked: read chunks until the zero-length terminator
/// - Unframed: no framing declared; body extent is decided elsewhere
///   (typically by connection close)
///
/// At most one framing mechanism is ever in effect, which this enum encodes
/// by construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BodyFraming {
    /// Body with a declared Content-Length, in bytes
    Length(u64),
    /// Body using chunked transfer encoding
    Chunked,
    /// No framing declared by the headers
    Unframed,
}

impl BodyFraming {
    /// Returns true if the body uses chunked transfer encoding
    #[inline]
    pub fn is_chunked(&self) -> bool {
        matches!(self, BodyFraming::Chunked)
    }

    /// Returns true if the headers declared no framing at all
    #[inline]
    pub fn is_unframed(&self) -> bool {
        matches!(self, BodyFraming::Unframed)
    }

    /// Returns the declared Content-Length, if that is the framing in effect
    #[inline]
    pub fn content_length(&self) -> Option<u64> {
        match self {
            BodyFraming::Length(length) => Some(*length),
            BodyFraming::Chunked | BodyFraming::Unframed => None,
        }
    }
}
