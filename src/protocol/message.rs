use bytes::{Buf, Bytes};
use http::{HeaderMap, HeaderValue};

/// Represents one decoded (or to-be-encoded) unit of a chunked message body.
///
/// A chunked body is a stream of content fragments terminated by a trailer
/// block. The generic parameter `Data` is the content type handed to the
/// encoder (defaults to `Bytes`, which is what the decoder produces).
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkedItem<Data: Buf = Bytes> {
    /// A fragment of body content
    Content(Data),
    /// The terminal trailer block, with any trailer fields that followed the
    /// zero-length chunk
    Trailer(HeaderMap),
}

impl<Data: Buf> ChunkedItem<Data> {
    /// Returns true if this item contains body content
    #[inline]
    pub fn is_content(&self) -> bool {
        matches!(self, ChunkedItem::Content(_))
    }

    /// Returns true if this item is the terminal trailer block
    #[inline]
    pub fn is_trailer(&self) -> bool {
        matches!(self, ChunkedItem::Trailer(_))
    }
}

impl ChunkedItem {
    /// Returns a reference to the contained bytes if this is a content fragment
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            ChunkedItem::Content(bytes) => Some(bytes),
            ChunkedItem::Trailer(_) => None,
        }
    }

    /// Consumes the item and returns the contained bytes if this is a content
    /// fragment
    pub fn into_bytes(self) -> Option<Bytes> {
        match self {
            ChunkedItem::Content(bytes) => Some(bytes),
            ChunkedItem::Trailer(_) => None,
        }
    }

    /// Returns the trailer fields if this is the terminal trailer block
    pub fn trailers(&self) -> Option<&HeaderMap> {
        match self {
            ChunkedItem::Content(_) => None,
            ChunkedItem::Trailer(headers) => Some(headers),
        }
    }

    /// Consumes the item and returns the trailer fields if this is the
    /// terminal trailer block
    pub fn into_trailers(self) -> Option<HeaderMap> {
        match self {
            ChunkedItem::Content(_) => None,
            ChunkedItem::Trailer(headers) => Some(headers),
        }
    }
}

/// Converts bytes into a content fragment
impl From<Bytes> for ChunkedItem {
    fn from(bytes: Bytes) -> Self {
        Self::Content(bytes)
    }
}

/// Checks if a Transfer-Encoding header value declares the chunked coding.
///
/// According to RFC 9112, chunked must be the final coding if present. This
/// is the only header semantics question the codec ever answers: callers use
/// it to decide whether to drive a message through this codec at all.
pub fn is_chunked(header_value: Option<&HeaderValue>) -> bool {
    const CHUNKED: &[u8] = b"chunked";
    if let Some(value) = header_value {
        if let Some(bytes) = value.as_bytes().rsplit(|b| *b == b',').next() {
            return bytes.trim_ascii() == CHUNKED;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_is_chunked() {
        {
            let headers = HeaderMap::new();
            assert!(!is_chunked(headers.get(http::header::TRANSFER_ENCODING)))
        }

        {
            let mut headers = HeaderMap::new();
            headers.insert("Transfer-Encoding", "gzip, chunked".parse().unwrap());
            assert!(is_chunked(headers.get(http::header::TRANSFER_ENCODING)));
        }

        {
            let mut headers = HeaderMap::new();
            headers.insert("Transfer-Encoding", "chunked, gzip".parse().unwrap());
            assert!(!is_chunked(headers.get(http::header::TRANSFER_ENCODING)));
        }

        {
            let mut headers = HeaderMap::new();
            headers.insert("Transfer-Encoding", "gzip".parse().unwrap());
            assert!(!is_chunked(headers.get(http::header::TRANSFER_ENCODING)));
        }
    }

    #[test]
    fn item_accessors() {
        let content = ChunkedItem::Content(Bytes::from_static(b"abc"));
        assert!(content.is_content());
        assert!(!content.is_trailer());
        assert_eq!(content.as_bytes().unwrap(), &Bytes::from_static(b"abc"));
        assert!(content.into_trailers().is_none());

        let trailer = ChunkedItem::Trailer(HeaderMap::new());
        assert!(trailer.is_trailer());
        assert!(trailer.as_bytes().is_none());
        assert!(trailer.into_trailers().unwrap().is_empty());
    }
}
