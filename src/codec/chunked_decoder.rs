//! Decoder implementation for HTTP chunked transfer encoding.
//!
//! This module decodes message bodies framed as chunked transfer coding per
//! [RFC 9112 Section 7.1](https://www.rfc-editor.org/rfc/rfc9112.html#name-chunked-transfer-coding):
//! a sequence of hex-length-prefixed chunks terminated by a zero-length chunk
//! and an optional trailer header block.
//!
//! Input arrives as arbitrarily sized network reads. The decoder suspends and
//! resumes across buffer boundaries without copying payload bytes: delivered
//! content is split off the caller's buffer, never duplicated, and anything
//! beyond the current message stays in the buffer for the caller's next step.

use crate::codec::scan::{HeaderScanState, ScanOutcome, ScanPhase};
use crate::ensure;
use crate::protocol::{ChunkedItem, DecodeError};
use bytes::{Buf, BytesMut};
use http::{HeaderMap, HeaderName, HeaderValue};
use httparse::Status;
use std::mem;
use tokio_util::codec::Decoder;
use tracing::trace;

/// Default ceiling for the trailer header block, in bytes.
pub const DEFAULT_MAX_TRAILER_BYTES: usize = 8 * 1024;

/// Maximum number of trailer fields accepted after the terminal chunk.
const MAX_TRAILER_NUM: usize = 16;

const LF: u8 = b'\n';

/// Per-message decode progress, mutated only by [`ChunkedDecoder::decode`].
///
/// Created when a chunked message begins, kept across every partial-buffer
/// invocation, and discarded (or [`reset`](ChunkedDecoder::reset)) once the
/// trailer block has been produced.
#[derive(Debug, Clone, PartialEq)]
struct ChunkDecodeState {
    /// length of the current chunk as parsed from its hex header
    chunk_length: u64,
    /// payload bytes of the current chunk not yet delivered; `<= 0` means
    /// the next chunk header is expected
    chunk_remainder: i64,
    /// set once a zero-length chunk header has been parsed; never reverts
    is_last_chunk: bool,
    /// offset within the current input buffer where payload begins
    chunk_content_start: usize,
    /// the trailer block has been emitted
    done: bool,
    /// populated only while `is_last_chunk` is set
    trailer_headers: HeaderMap,
}

impl ChunkDecodeState {
    fn new() -> Self {
        Self {
            chunk_length: 0,
            chunk_remainder: 0,
            is_last_chunk: false,
            chunk_content_start: 0,
            done: false,
            trailer_headers: HeaderMap::new(),
        }
    }
}

/// A decoder for handling HTTP chunked transfer encoding.
///
/// One decoder instance owns the decode state for exactly one in-flight
/// message; the per-connection context that drives it guarantees
/// single-writer access, so no locking happens here. The decoder performs no
/// I/O: it only transforms the buffer it is handed, and "need more input" is
/// the synchronous `Ok(None)` return of the [`Decoder`] contract.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkedDecoder {
    max_trailer_size: usize,
    strict_line_terminator: bool,
    head_response: bool,
    state: ChunkDecodeState,
    scan: HeaderScanState,
}

impl ChunkedDecoder {
    /// Creates a decoder for one chunked message.
    ///
    /// `max_trailer_size` bounds the trailer header block that may follow the
    /// terminal chunk.
    pub fn new(max_trailer_size: usize) -> Self {
        Self {
            max_trailer_size,
            strict_line_terminator: false,
            head_response: false,
            state: ChunkDecodeState::new(),
            scan: HeaderScanState::new(),
        }
    }

    /// Requires CRLF terminators on chunk framing lines per RFC 9112.
    ///
    /// Off by default: a bare LF is accepted for compatibility with lenient
    /// senders.
    pub fn strict_line_terminator(mut self, strict: bool) -> Self {
        self.strict_line_terminator = strict;
        self
    }

    /// Marks this decoder as parsing the response to a HEAD request.
    ///
    /// Such a response may declare chunked framing and still legally carry no
    /// body at all; the decoder then produces the terminal trailer block
    /// immediately instead of waiting for chunk bytes.
    pub fn head_response(mut self, head_response: bool) -> Self {
        self.head_response = head_response;
        self
    }

    /// Discards all per-message progress so the decoder can be reused for a
    /// new message.
    pub fn reset(&mut self) {
        self.state = ChunkDecodeState::new();
        self.scan.recycle();
    }

    /// Consumes the line terminator left over from the previous chunk's
    /// payload. A single LF is sufficient; bytes before it are skipped.
    ///
    /// Returns `false` when the buffer runs out before an LF shows up.
    fn consume_payload_terminator(&mut self, src: &mut BytesMut) -> bool {
        if self.scan.phase != ScanPhase::LengthParsed {
            // nothing committed yet: either the very first chunk of the
            // message or a suspended size-line scan
            return true;
        }

        match src.iter().position(|b| *b == LF) {
            Some(idx) => {
                src.advance(idx + 1);
                self.scan.recycle();
                !src.is_empty()
            }
            None => {
                // drop the partial terminator; its LF arrives with the next
                // read
                src.clear();
                false
            }
        }
    }

    /// Parses the MIME-style trailer block that follows the terminal chunk,
    /// delegating field parsing to `httparse`.
    ///
    /// Returns `true` once the blank line ending the block was consumed and
    /// the fields were moved into the decode state; `false` while more input
    /// is required. The block is re-parsed from its start on every call, so
    /// nothing is consumed from `src` until it is complete.
    fn parse_last_chunk_trailer(&mut self, src: &BytesMut) -> Result<bool, DecodeError> {
        let block = &src[self.scan.line_start..];

        let mut fields = [httparse::EMPTY_HEADER; MAX_TRAILER_NUM];
        let parsed = httparse::parse_headers(block, &mut fields).map_err(|e| match e {
            httparse::Error::TooManyHeaders => DecodeError::too_many_trailers(MAX_TRAILER_NUM),
            e => DecodeError::invalid_trailer(e),
        })?;

        match parsed {
            Status::Complete((block_len, fields)) => {
                ensure!(
                    self.scan.line_start + block_len <= self.scan.byte_limit,
                    DecodeError::header_block_overflow(block_len, self.max_trailer_size)
                );

                let trailers = &mut self.state.trailer_headers;
                trailers.reserve(fields.len());
                for field in fields {
                    let name = HeaderName::from_bytes(field.name.as_bytes()).map_err(DecodeError::invalid_trailer)?;
                    let value = HeaderValue::from_bytes(field.value).map_err(DecodeError::invalid_trailer)?;
                    trailers.append(name, value);
                }

                self.scan.cursor = self.scan.line_start + block_len;
                Ok(true)
            }
            Status::Partial => {
                ensure!(
                    src.len() < self.scan.byte_limit,
                    DecodeError::header_block_overflow(src.len() - self.scan.line_start, self.max_trailer_size)
                );
                Ok(false)
            }
        }
    }
}

impl Default for ChunkedDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TRAILER_BYTES)
    }
}

impl Decoder for ChunkedDecoder {
    type Item = ChunkedItem;
    type Error = DecodeError;

    /// Drives one decode attempt over the buffered bytes.
    ///
    /// # Returns
    /// - `Ok(Some(ChunkedItem::Content(bytes)))` when a content fragment was
    ///   split off the buffer
    /// - `Ok(Some(ChunkedItem::Trailer(headers)))` when the terminal chunk
    ///   and its trailer block were consumed
    /// - `Ok(None)` when more input is required; the unconsumed bytes stay
    ///   in `src`
    /// - `Err(DecodeError)` on a fatal framing violation
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if self.state.done {
            trace!("finished reading chunked data");
            return Ok(Some(ChunkedItem::Trailer(HeaderMap::new())));
        }

        if !self.state.is_last_chunk && self.state.chunk_remainder <= 0 {
            // the terminator of the previous chunk's payload is still in the
            // buffer and must go before the next size line
            if !self.consume_payload_terminator(src) {
                return Ok(None);
            }

            match self.scan.scan_chunk_length(src, self.strict_line_terminator)? {
                ScanOutcome::Parsed { length, content_start } => {
                    self.state.chunk_length = length;
                    self.state.chunk_remainder = length as i64;
                    self.state.chunk_content_start = content_start;
                }
                ScanOutcome::Incomplete => {
                    if self.head_response {
                        // chunked framing was declared, but a HEAD response
                        // legally carries no body
                        self.state.done = true;
                        return Ok(Some(ChunkedItem::Trailer(mem::take(&mut self.state.trailer_headers))));
                    }
                    return Ok(None);
                }
            }
        } else {
            // mid-chunk: the size line was consumed on a previous call, so
            // payload starts right at the buffer front
            self.state.chunk_content_start = 0;
        }

        if self.state.chunk_length == 0 {
            if !self.state.is_last_chunk {
                self.state.is_last_chunk = true;
                self.scan.enter_trailers(self.state.chunk_content_start, self.max_trailer_size);
            }

            if !self.parse_last_chunk_trailer(src)? {
                return Ok(None);
            }

            // content start moves past the trailer block
            self.state.chunk_content_start = self.scan.cursor;
        }

        let content_start = self.state.chunk_content_start;
        src.advance(content_start);
        self.state.chunk_content_start = 0;

        if self.state.is_last_chunk {
            // whatever is still in `src` belongs to the next message
            self.state.done = true;
            trace!(trailers = self.state.trailer_headers.len(), "finished reading chunked data");
            return Ok(Some(ChunkedItem::Trailer(mem::take(&mut self.state.trailer_headers))));
        }

        let owed = self.state.chunk_remainder as u64;
        let read_size = std::cmp::min(owed, src.len() as u64) as usize;
        if read_size == 0 {
            // never deliver a zero-length fragment
            return Ok(None);
        }

        let bytes = src.split_to(read_size).freeze();
        self.state.chunk_remainder -= read_size as i64;
        trace!(len = bytes.len(), "read chunked bytes");
        Ok(Some(ChunkedItem::Content(bytes)))
    }
}
