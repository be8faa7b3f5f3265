/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Tokio codec for FIX frame boundaries.
//!
//! [`FrameCodec`] splits a TCP byte stream into whole FIX frames using the
//! BeginString/BodyLength prefix. It frames only; content validation
//! (checksum, body length agreement, field semantics) belongs to the
//! validation pipeline. An opt-in checksum check is available for links
//! where corrupt frames should be dropped at the edge.

use bytes::{BufMut, Bytes, BytesMut};
use fixgate_tagvalue::checksum::{calculate_checksum, parse_checksum};
use memchr::memchr;
use thiserror::Error;
use tokio_util::codec::{Decoder, Encoder};

/// Errors produced while framing a byte stream.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Stream does not start with the `8=` BeginString prefix.
    #[error("frame must start with 8=")]
    InvalidBeginString,

    /// Second field is not BodyLength (tag 9).
    #[error("expected body length field (tag 9) after begin string")]
    MissingBodyLength,

    /// BodyLength value is not a decimal integer.
    #[error("body length value is not a number")]
    InvalidBodyLength,

    /// CheckSum value is not three decimal digits.
    #[error("checksum field is not three digits")]
    InvalidChecksumField,

    /// Declared and recomputed checksums disagree.
    #[error("checksum mismatch: declared {declared}, calculated {calculated}")]
    ChecksumMismatch {
        /// Value declared in tag 10.
        declared: u8,
        /// Recomputed modulo-256 sum.
        calculated: u8,
    },

    /// Frame exceeds the configured maximum size.
    #[error("frame too large: {size} bytes exceeds maximum {max_size}")]
    FrameTooLarge {
        /// Declared frame size.
        size: usize,
        /// Maximum allowed size.
        max_size: usize,
    },

    /// Underlying I/O error.
    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TransportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

const SOH: u8 = 0x01;

/// Shortest frame worth inspecting: `8=F|9=1|X|10=000|`.
const MIN_FRAME_LEN: usize = 17;

/// Byte length of the trailer field `10=XXX|`.
const TRAILER_LEN: usize = 7;

/// Tokio codec that yields one complete FIX frame per item.
#[derive(Debug, Clone)]
pub struct FrameCodec {
    max_frame_size: usize,
    verify_checksum: bool,
}

impl FrameCodec {
    /// Creates a codec with a 1MB frame limit and checksum verification off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_frame_size: 1024 * 1024,
            verify_checksum: false,
        }
    }

    /// Sets the maximum frame size.
    #[must_use]
    pub const fn with_max_frame_size(mut self, size: usize) -> Self {
        self.max_frame_size = size;
        self
    }

    /// Enables or disables edge checksum verification.
    #[must_use]
    pub const fn with_checksum_verification(mut self, verify: bool) -> Self {
        self.verify_checksum = verify;
        self
    }

    /// Locates the end of the BodyLength field and parses its value.
    ///
    /// Returns `Ok(None)` when more bytes are needed.
    fn read_body_length(src: &[u8]) -> Result<Option<(usize, usize)>, TransportError> {
        let begin_end = match memchr(SOH, src) {
            Some(pos) => pos,
            None => return Ok(None),
        };

        let len_start = begin_end + 1;
        if src.len() < len_start + 2 {
            return Ok(None);
        }
        if &src[len_start..len_start + 2] != b"9=" {
            return Err(TransportError::MissingBodyLength);
        }

        let len_end = match memchr(SOH, &src[len_start..]) {
            Some(pos) => len_start + pos,
            None => return Ok(None),
        };

        let digits = &src[len_start + 2..len_end];
        let value = std::str::from_utf8(digits)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .ok_or(TransportError::InvalidBodyLength)?;

        Ok(Some((len_end, value)))
    }

    fn verify_trailer(src: &[u8], frame_len: usize) -> Result<(), TransportError> {
        let trailer_start = frame_len - TRAILER_LEN;
        let digits = &src[trailer_start + 3..trailer_start + 6];
        let declared =
            parse_checksum(digits).ok_or(TransportError::InvalidChecksumField)?;
        let calculated = calculate_checksum(&src[..trailer_start]);
        if declared != calculated {
            return Err(TransportError::ChecksumMismatch {
                declared,
                calculated,
            });
        }
        Ok(())
    }
}

impl Default for FrameCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for FrameCodec {
    type Item = BytesMut;
    type Error = TransportError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < MIN_FRAME_LEN {
            return Ok(None);
        }
        if &src[0..2] != b"8=" {
            return Err(TransportError::InvalidBeginString);
        }

        let Some((len_end, body_length)) = Self::read_body_length(src)? else {
            return Ok(None);
        };

        // BodyLength counts the bytes after its own SOH up to "10=".
        // The declared value is peer-controlled; the length arithmetic must
        // not be able to overflow.
        let frame_len = len_end
            .checked_add(1 + TRAILER_LEN)
            .and_then(|n| n.checked_add(body_length))
            .ok_or(TransportError::FrameTooLarge {
                size: usize::MAX,
                max_size: self.max_frame_size,
            })?;
        if frame_len > self.max_frame_size {
            return Err(TransportError::FrameTooLarge {
                size: frame_len,
                max_size: self.max_frame_size,
            });
        }

        if src.len() < frame_len {
            src.reserve(frame_len - src.len());
            return Ok(None);
        }

        if self.verify_checksum {
            Self::verify_trailer(src, frame_len)?;
        }

        Ok(Some(src.split_to(frame_len)))
    }
}

impl Encoder<Bytes> for FrameCodec {
    type Error = TransportError;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(item.len());
        dst.put_slice(&item);
        Ok(())
    }
}

impl Encoder<&[u8]> for FrameCodec {
    type Error = TransportError;

    fn encode(&mut self, item: &[u8], dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(item.len());
        dst.put_slice(item);
        Ok(())
    }
}
