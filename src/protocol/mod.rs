//! Protocol data model shared by the codec operations.
//!
//! This module holds the types the codec layer produces and consumes:
//!
//! - **Header representation** ([`header`]): ordered, duplicate-tolerant
//!   header fields
//!   - [`HeaderField`]: a single `(name, value)` byte pair
//!   - [`HeaderList`]: wire-ordered field sequence with comma-list access
//!
//! - **Framing** ([`framing`]): the decision the protocol engine acts on
//!   - [`BodyFraming`]: chunked, fixed length, or unframed
//!
//! - **Error Handling** ([`error`]): fatal header-section violations
//!   - [`ProtocolError`]: single error surface of this crate
//!
//! All entities here are transient: built fresh per message from caller
//! supplied data and dropped once the message's headers are consumed. None
//! of them keeps cross-message state.

mod error;
pub use error::ProtocolError;

mod framing;
pub use framing::BodyFraming;

mod header;
pub use header::HeaderField;
pub use header::HeaderList;
