//! Chunked transfer-coding codec: decode and encode paths.
//!
//! # Architecture
//!
//! - [`ChunkedDecoder`]: turns a chunked wire stream into content fragments
//!   plus the terminal trailer block, resuming across arbitrary buffer
//!   boundaries.
//! - [`ChunkedEncoder`]: turns content fragments and trailer fields back into
//!   wire chunks.
//! - The chunk-size line scanner and its suspendable state machine live in
//!   their own module.
//!
//! Both directions implement the `tokio_util::codec` traits, so they plug
//! into the same framed-I/O pipelines as any other codec:
//!
//! ```
//! use bytes::BytesMut;
//! use chunked_codec::codec::ChunkedDecoder;
//! use tokio_util::codec::Decoder;
//!
//! let mut decoder = ChunkedDecoder::default();
//! let mut buffer = BytesMut::from(&b"5\r\nhello\r\n0\r\n\r\n"[..]);
//!
//! let content = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(&content.as_bytes().unwrap()[..], b"hello");
//!
//! let trailer = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert!(trailer.is_trailer());
//! ```

mod chunked_decoder;
mod chunked_encoder;
mod scan;

pub use chunked_decoder::ChunkedDecoder;
pub use chunked_decoder::DEFAULT_MAX_TRAILER_BYTES;
pub use chunked_encoder::ChunkedEncoder;
