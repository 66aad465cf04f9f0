//! Encoder implementation for HTTP chunked transfer encoding.
//!
//! Each content fragment becomes one wire chunk: the length in lowercase hex,
//! CRLF, the payload bytes, CRLF. The trailer item terminates the message
//! with the zero-length marker, any trailer fields, and the final CRLF.

use crate::protocol::{ChunkedItem, EncodeError};
use bytes::{Buf, BufMut, BytesMut};
use http::HeaderMap;
use std::io::Write;
use tokio_util::codec::Encoder;
use tracing::warn;

/// An encoder producing HTTP chunked transfer encoding.
///
/// One instance encodes exactly one message: after the terminal chunk has
/// been written, further items are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkedEncoder {
    eof: bool,
}

impl ChunkedEncoder {
    pub fn new() -> Self {
        Self { eof: false }
    }

    /// Returns true once the terminal chunk has been written.
    pub fn is_finish(&self) -> bool {
        self.eof
    }
}

impl Default for ChunkedEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Buf> Encoder<ChunkedItem<D>> for ChunkedEncoder {
    type Error = EncodeError;

    /// Encodes one chunk (or the message terminator) into `dst`.
    ///
    /// A zero-length content fragment is skipped entirely: on the wire it
    /// would read as the terminal marker.
    fn encode(&mut self, item: ChunkedItem<D>, dst: &mut BytesMut) -> Result<(), Self::Error> {
        if self.eof {
            warn!("encode chunked item but the terminal chunk was already written");
            return Ok(());
        }

        match item {
            ChunkedItem::Content(data) => {
                if !data.has_remaining() {
                    return Ok(());
                }
                write!(helper::Writer(dst), "{:x}\r\n", data.remaining())?;
                dst.reserve(data.remaining() + 2);
                dst.put(data);
                dst.extend_from_slice(b"\r\n");
                Ok(())
            }
            ChunkedItem::Trailer(trailers) => {
                self.eof = true;
                dst.extend_from_slice(b"0\r\n");
                encode_trailer_fields(&trailers, dst);
                dst.extend_from_slice(b"\r\n");
                Ok(())
            }
        }
    }
}

/// Serializes trailer fields as `name: value` lines.
fn encode_trailer_fields(trailers: &HeaderMap, dst: &mut BytesMut) {
    for (name, value) in trailers.iter() {
        dst.reserve(name.as_str().len() + value.len() + 4);
        dst.put_slice(name.as_str().as_bytes());
        dst.put_slice(b": ");
        dst.put_slice(value.as_ref());
        dst.put_slice(b"\r\n");
    }
}

mod helper {
    use bytes::{BufMut, BytesMut};
    use std::io;

    pub struct Writer<'a>(pub &'a mut BytesMut);

    impl io::Write for Writer<'_> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.put_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
