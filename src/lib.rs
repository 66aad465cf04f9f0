//! An incremental codec for the HTTP/1.1 chunked transfer coding
//!
//! This crate implements the chunked transfer-coding codec of
//! [RFC 9112](https://www.rfc-editor.org/rfc/rfc9112.html): the component
//! that decodes a byte stream framed as hex-length-prefixed chunks into
//! logical content fragments (plus the optional trailer header block), and
//! that encodes outgoing content back into the wire format.
//!
//! # Features
//!
//! - Fully incremental decoding: input arrives as arbitrarily sized network
//!   reads, and the decoder suspends and resumes across buffer boundaries
//!   without losing state
//! - Zero-copy content delivery through `bytes` buffer splitting
//! - Trailer header capture after the terminal chunk, parsed with `httparse`
//! - Bounded parsing cost for chunk-size lines and trailer blocks, with a
//!   precise error taxonomy for each ceiling
//! - Optional strict CRLF line-terminator checking (RFC 9112); lenient
//!   bare-LF acceptance by default
//! - `tokio_util::codec` trait implementations for framed-pipeline use
//!
//! # Example
//!
//! ```
//! use bytes::{Bytes, BytesMut};
//! use chunked_codec::codec::{ChunkedDecoder, ChunkedEncoder};
//! use chunked_codec::protocol::ChunkedItem;
//! use http::HeaderMap;
//! use tokio_util::codec::{Decoder, Encoder};
//!
//! // encode two fragments and the message terminator
//! let mut encoder = ChunkedEncoder::new();
//! let mut wire = BytesMut::new();
//! encoder.encode(ChunkedItem::Content(Bytes::from_static(b"hello, ")), &mut wire).unwrap();
//! encoder.encode(ChunkedItem::Content(Bytes::from_static(b"world")), &mut wire).unwrap();
//! encoder.encode(ChunkedItem::<Bytes>::Trailer(HeaderMap::new()), &mut wire).unwrap();
//!
//! // decode them back, possibly across many partial reads
//! let mut decoder = ChunkedDecoder::default();
//! let mut content = Vec::new();
//! loop {
//!     match decoder.decode(&mut wire).unwrap() {
//!         Some(ChunkedItem::Content(bytes)) => content.extend_from_slice(&bytes),
//!         Some(ChunkedItem::Trailer(_)) => break,
//!         None => break,
//!     }
//! }
//! assert_eq!(&content[..], b"hello, world");
//! ```
//!
//! # Scope
//!
//! The codec never performs I/O and never interprets header semantics; it
//! only transforms the buffers it is handed. Whether a message uses chunked
//! framing at all is decided by the caller (see
//! [`protocol::is_chunked`]), and "need more input" is a synchronous return
//! value, not a suspension point.
//!
//! # Limitations
//!
//! - Chunk-size lines are examined for at most 16 bytes, which caps chunk
//!   sizes at 15 hex digits and leaves no room for long chunk extensions
//! - Maximum trailer block size: 8KB by default, configurable per decoder
//! - Maximum number of trailer fields: 16

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
