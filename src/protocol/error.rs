use thiserror::Error;

/// Errors raised while validating the header section of a message.
///
/// Every variant is fatal for the current message: the caller gets no header
/// list back, and the usual connection-level response is to tear the
/// connection down rather than guess at a recovery. These checks exist to
/// keep two hops from ever disagreeing about message framing, so a
/// best-effort repair would defeat their purpose.
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("illegal header name: {name:?}")]
    MalformedHeaderName { name: String },

    #[error("multiple Content-Length headers")]
    DuplicateContentLength,

    #[error("bad Content-Length: {value:?}")]
    MalformedContentLength { value: String },

    #[error("multiple Transfer-Encoding headers")]
    DuplicateTransferEncoding,

    #[error("unsupported Transfer-Encoding: {value:?}, only chunked is supported")]
    UnsupportedTransferEncoding { value: String },
}

impl ProtocolError {
    pub fn malformed_header_name(name: &[u8]) -> Self {
        Self::MalformedHeaderName { name: String::from_utf8_lossy(name).into_owned() }
    }

    pub fn malformed_content_length(value: &[u8]) -> Self {
        Self::MalformedContentLength { value: String::from_utf8_lossy(value).into_owned() }
    }

    pub fn unsupported_transfer_encoding(value: &[u8]) -> Self {
        Self::UnsupportedTransferEncoding { value: String::from_utf8_lossy(value).into_owned() }
    }
}
