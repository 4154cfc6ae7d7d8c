//! Stateless operations over a message's header section.
//!
//! The operations here are consumed by an external protocol engine in a
//! fixed order: raw pairs go through [`normalize`] once, and the validated
//! [`HeaderList`](crate::protocol::HeaderList) then feeds [`resolve_framing`]
//! and [`expects_100_continue`] (plus the comma-list accessors on the list
//! itself). Each operation is a pure function over its inputs; none keeps
//! state between calls, performs I/O, or suspends.
//!
//! # Example
//!
//! ```
//! use http1_framing::codec::{expects_100_continue, normalize, resolve_framing};
//! use http1_framing::protocol::BodyFraming;
//!
//! # fn main() -> Result<(), http1_framing::protocol::ProtocolError> {
//! let headers = normalize([
//!     ("Host", "example.com"),
//!     ("Expect", "100-continue"),
//!     ("Content-Length", "5"),
//! ])?;
//!
//! assert_eq!(resolve_framing(&headers)?, BodyFraming::Length(5));
//! assert!(expects_100_continue(http::Version::HTTP_11, &headers));
//! # Ok(())
//! # }
//! ```

mod expect;
mod framing;
mod normalizer;

pub use expect::expects_100_continue;
pub use framing::resolve_framing;
pub use normalizer::normalize;
