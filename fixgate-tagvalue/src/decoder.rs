/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! FIX tag=value decoder.
//!
//! Splits a frame on the SOH (0x01) field delimiter, then each field on the
//! first `=` into a (tag, value) pair. Decoding is order-preserving, never
//! reorders fields, and never produces a partial result: any byte input
//! yields either a complete field sequence or a [`CodecError`].

use crate::checksum::calculate_checksum;
use fixgate_core::error::CodecError;
use fixgate_core::field::{Field, FieldRef};
use fixgate_core::tags;
use memchr::memchr;
use smallvec::SmallVec;
use std::ops::Range;

/// SOH (Start of Header) delimiter used in FIX messages.
pub const SOH: u8 = 0x01;

/// Equals sign delimiter between tag and value.
pub const EQUALS: u8 = b'=';

/// Decodes a byte buffer into an ordered field sequence.
///
/// Every field must be SOH-terminated. `decode` is the exact inverse of
/// [`crate::encoder::encode`] for any well-formed field sequence.
///
/// # Errors
/// - `CodecError::MalformedField` when a field lacks `=`
/// - `CodecError::InvalidTag` when the tag segment is not a positive integer
/// - `CodecError::Incomplete` when the buffer ends mid-field
pub fn decode(input: &[u8]) -> Result<Vec<Field>, CodecError> {
    let mut decoder = Decoder::new(input);
    let mut fields = Vec::new();
    while let Some(field) = decoder.next_field()? {
        fields.push(field.to_owned());
    }
    Ok(fields)
}

/// Streaming zero-copy field reader over a frame buffer.
#[derive(Debug)]
pub struct Decoder<'a> {
    /// Input buffer.
    input: &'a [u8],
    /// Current position in the buffer.
    offset: usize,
}

impl<'a> Decoder<'a> {
    /// Creates a new decoder for the given input buffer.
    #[inline]
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self { input, offset: 0 }
    }

    /// Reads the next field from the buffer.
    ///
    /// # Returns
    /// `Ok(None)` when the buffer is exhausted.
    ///
    /// # Errors
    /// Returns `CodecError` if the next field is malformed.
    pub fn next_field(&mut self) -> Result<Option<FieldRef<'a>>, CodecError> {
        if self.offset >= self.input.len() {
            return Ok(None);
        }

        let field_start = self.offset;
        let remaining = &self.input[self.offset..];

        let soh_pos = memchr(SOH, remaining).ok_or(CodecError::Incomplete)?;
        let segment = &remaining[..soh_pos];

        let eq_pos = memchr(EQUALS, segment).ok_or(CodecError::MalformedField {
            offset: field_start,
        })?;
        let tag_bytes = &segment[..eq_pos];
        let tag = parse_tag(tag_bytes)
            .ok_or_else(|| CodecError::InvalidTag(String::from_utf8_lossy(tag_bytes).into()))?;

        let value = &segment[eq_pos + 1..];
        self.offset += soh_pos + 1;

        Ok(Some(FieldRef::new(tag, value)))
    }

    /// Returns the current offset in the buffer.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if the buffer has been fully consumed.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offset >= self.input.len()
    }
}

/// A fully decoded wire frame.
///
/// Besides the field sequence, the frame records the byte ranges the
/// validator needs to recompute integrity fields: the body range (after the
/// BodyLength field, before `10=`) and the checksum coverage (start of the
/// frame up to `10=`).
#[derive(Debug)]
pub struct Frame<'a> {
    buffer: &'a [u8],
    fields: SmallVec<[FieldRef<'a>; 32]>,
    /// Byte range the declared BodyLength must match.
    body: Option<Range<usize>>,
    /// Byte offset of the start of the `10=` field.
    trailer_start: Option<usize>,
}

impl<'a> Frame<'a> {
    /// Returns the raw frame bytes.
    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    /// Returns the decoded fields in wire order.
    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldRef<'a>] {
        &self.fields
    }

    /// Looks up the first field with the given tag.
    #[must_use]
    pub fn field(&self, tag: u32) -> Option<&FieldRef<'a>> {
        self.fields.iter().find(|f| f.tag == tag)
    }

    /// Converts the frame into an owned field sequence.
    #[must_use]
    pub fn to_fields(&self) -> Vec<Field> {
        self.fields.iter().map(FieldRef::to_owned).collect()
    }

    /// Returns the body range, when both BodyLength and CheckSum are present.
    #[must_use]
    pub fn body_range(&self) -> Option<Range<usize>> {
        self.body.clone()
    }

    /// Returns the byte length the BodyLength field should declare.
    #[must_use]
    pub fn actual_body_length(&self) -> Option<usize> {
        self.body.as_ref().map(Range::len)
    }

    /// Recomputes the checksum over everything before the `10=` field.
    #[must_use]
    pub fn calculated_checksum(&self) -> Option<u8> {
        self.trailer_start
            .map(|start| calculate_checksum(&self.buffer[..start]))
    }
}

/// Decodes a complete wire frame, recording integrity ranges.
///
/// Field-level errors are reported exactly as [`decode`] reports them.
/// Structural problems (missing BodyLength or CheckSum) are NOT errors
/// here; the ranges are simply absent and the model/validator layers
/// classify the message.
///
/// # Errors
/// Returns `CodecError` if any field is malformed.
pub fn decode_frame(input: &[u8]) -> Result<Frame<'_>, CodecError> {
    let mut decoder = Decoder::new(input);
    let mut fields: SmallVec<[FieldRef<'_>; 32]> = SmallVec::new();
    let mut body_start: Option<usize> = None;
    let mut trailer_start: Option<usize> = None;

    loop {
        let field_start = decoder.offset();
        let Some(field) = decoder.next_field()? else {
            break;
        };

        if field.tag == tags::BODY_LENGTH && body_start.is_none() {
            body_start = Some(decoder.offset());
        }
        if field.tag == tags::CHECK_SUM && trailer_start.is_none() {
            trailer_start = Some(field_start);
        }

        fields.push(field);
    }

    let body = match (body_start, trailer_start) {
        (Some(start), Some(end)) if start <= end => Some(start..end),
        _ => None,
    };

    Ok(Frame {
        buffer: input,
        fields,
        body,
        trailer_start,
    })
}

/// Parses a tag number from ASCII bytes.
///
/// Tags are positive integers; `0`, empty, and non-digit input are invalid.
#[inline]
fn parse_tag(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 10 {
        return None;
    }

    let mut result: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        result = result.checked_mul(10)?.checked_add((b - b'0') as u32)?;
    }

    if result == 0 { None } else { Some(result) }
}
