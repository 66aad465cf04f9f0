//! Protocol types shared by the decode and encode paths.
//!
//! # Architecture
//!
//! - **Message model** ([`message`]): [`ChunkedItem`] represents one unit of
//!   a chunked body stream (a content fragment or the terminal trailer
//!   block), and [`is_chunked`] answers the single header question the codec
//!   cares about.
//!
//! - **Error handling** ([`error`]): [`CodecError`] is the top-level error
//!   type, wrapping [`DecodeError`] (parse path) and [`EncodeError`]
//!   (serialize path). Insufficient input is *not* an error: both codec
//!   directions signal it through their `Ok(None)`/no-op return paths.

mod message;
pub use message::ChunkedItem;
pub use message::is_chunked;

mod error;
pub use error::CodecError;
pub use error::DecodeError;
pub use error::EncodeError;
