//! Header normalization and body framing resolution for HTTP/1.x messages
//!
//! This crate implements the correctness-critical slice of HTTP/1.x parsing:
//! validating a message's header section and deriving the *framing decision*
//! that tells the surrounding protocol engine how to delimit the body.
//! Framing — chunked transfer encoding versus a fixed Content-Length — is
//! where request-smuggling attacks live: two hops that disagree about where
//! a body ends can be made to read two different messages out of the same
//! bytes. Everything here exists to make that disagreement impossible.
//!
//! The crate is sans-IO: no sockets, no async, no state machine. It expects
//! a byte-level tokenizer upstream (something that splits raw bytes into
//! name/value pairs) and a connection state machine downstream, and talks to
//! both through plain values.
//!
//! # Features
//!
//! - Strict header-section validation (duplicate and malformed framing
//!   headers are fatal, never repaired)
//! - Framing resolution with correct Transfer-Encoding over Content-Length
//!   precedence
//! - Generic comma-separated header value access for list-typed headers
//!   (Connection, Expect, ...)
//! - Expect: 100-continue detection with the version and case-sensitivity
//!   rules applied
//! - Order-preserving, duplicate-tolerant header representation suitable
//!   for proxying
//!
//! # Example
//!
//! ```
//! use http::Version;
//! use http1_framing::codec::{expects_100_continue, normalize, resolve_framing};
//! use http1_framing::protocol::BodyFraming;
//!
//! # fn main() -> Result<(), http1_framing::protocol::ProtocolError> {
//! // raw pairs as produced by an upstream header-block tokenizer
//! let headers = normalize([
//!     ("Host", "example.com"),
//!     ("Transfer-Encoding", "chunked"),
//! ])?;
//!
//! // the protocol engine picks its body reading strategy from this
//! assert_eq!(resolve_framing(&headers)?, BodyFraming::Chunked);
//! assert!(!expects_100_continue(Version::HTTP_11, &headers));
//!
//! // anything framing-ambiguous never gets past normalization
//! assert!(normalize([("Content-Length", "5"), ("Content-Length", "8")]).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The crate is organized into two modules:
//!
//! - [`protocol`]: the data model — [`protocol::HeaderList`],
//!   [`protocol::BodyFraming`], [`protocol::ProtocolError`]
//! - [`codec`]: the stateless operations — [`codec::normalize`],
//!   [`codec::resolve_framing`], [`codec::expects_100_continue`]
//!
//! Data flows strictly one way: raw pairs → [`codec::normalize`] → validated
//! [`protocol::HeaderList`] → framing/expect decisions consumed by the
//! external engine. No operation depends on another's internal state.
//!
//! # Error Handling
//!
//! All violations surface as [`protocol::ProtocolError`], synchronously and
//! without retry. Every variant is fatal for the current message; the engine
//! is expected to respond at the connection level (typically by closing)
//! rather than attempting best-effort recovery.
//!
//! # Limitations
//!
//! - Only `Transfer-Encoding: chunked` is accepted; any other encoding is
//!   rejected during normalization
//! - Comma-list access splits naively and is documented as unsound for
//!   header grammars that put commas inside quoted strings
//! - Header semantics beyond Content-Length, Transfer-Encoding and Expect
//!   are not interpreted

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
