use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("decode error: {source}")]
    DecodeError {
        #[from]
        source: DecodeError,
    },

    #[error("encode error: {source}")]
    EncodeError {
        #[from]
        source: EncodeError,
    },
}

/// Fatal decode-side failures.
///
/// Insufficient input is never an error; the decoder signals it by returning
/// `Ok(None)` and resumes on the next call. Any variant below invalidates the
/// remainder of the message: the caller must stop feeding it and tear down
/// the stream.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed chunk header: {reason}")]
    MalformedChunkHeader { reason: String },

    #[error("header block size too large, current: {current_size} exceed the limit {max_size}")]
    HeaderBlockOverflow { current_size: usize, max_size: usize },

    #[error("chunk length overflows the representable range")]
    NumericOverflow,

    #[error("invalid trailer: {reason}")]
    InvalidTrailer { reason: String },

    #[error("trailer field number exceed the limit {max_num}")]
    TooManyTrailers { max_num: usize },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl DecodeError {
    pub fn malformed_chunk_header<S: ToString>(str: S) -> Self {
        Self::MalformedChunkHeader { reason: str.to_string() }
    }

    pub fn header_block_overflow(current_size: usize, max_size: usize) -> Self {
        Self::HeaderBlockOverflow { current_size, max_size }
    }

    pub fn invalid_trailer<S: ToString>(str: S) -> Self {
        Self::InvalidTrailer { reason: str.to_string() }
    }

    pub fn too_many_trailers(max_num: usize) -> Self {
        Self::TooManyTrailers { max_num }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl EncodeError {
    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}
