/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! FIX tag=value encoder.
//!
//! [`encode`] serializes an ordered field sequence verbatim; it never
//! reorders fields, since header fields like BodyLength and CheckSum depend
//! on position. [`MessageBuilder`] builds a complete wire message, deriving
//! BodyLength and CheckSum from the body it is given.

use crate::checksum::{calculate_checksum, format_checksum};
use bytes::{BufMut, BytesMut};
use fixgate_core::field::Field;

/// SOH (Start of Header) delimiter used in FIX messages.
pub const SOH: u8 = 0x01;

/// Serializes an ordered field sequence to wire bytes.
///
/// Joins fields as `tag=value` followed by SOH, in the given order.
/// Exact inverse of [`crate::decoder::decode`] for well-formed sequences.
#[must_use]
pub fn encode(fields: &[Field]) -> BytesMut {
    let capacity: usize = fields.iter().map(|f| f.value.len() + 12).sum();
    let mut buf = BytesMut::with_capacity(capacity);
    let mut tag_buf = itoa::Buffer::new();

    for field in fields {
        buf.put_slice(tag_buf.format(field.tag).as_bytes());
        buf.put_u8(b'=');
        buf.put_slice(&field.value);
        buf.put_u8(SOH);
    }

    buf
}

/// Builder for complete FIX wire messages.
///
/// Body fields are appended in call order; `finish` prepends BeginString
/// (tag 8) and a computed BodyLength (tag 9), then appends a computed
/// CheckSum (tag 10).
#[derive(Debug)]
pub struct MessageBuilder {
    /// Buffer for the message body (between BodyLength and CheckSum).
    body: BytesMut,
    /// The BeginString value (e.g., "FIX.4.4").
    begin_string: String,
}

impl MessageBuilder {
    /// Creates a new builder with the specified BeginString.
    #[must_use]
    pub fn new(begin_string: impl Into<String>) -> Self {
        Self {
            body: BytesMut::with_capacity(256),
            begin_string: begin_string.into(),
        }
    }

    /// Appends a field with a string value.
    #[inline]
    pub fn put_str(&mut self, tag: u32, value: &str) {
        self.put_raw(tag, value.as_bytes());
    }

    /// Appends a field with an unsigned integer value.
    #[inline]
    pub fn put_uint(&mut self, tag: u32, value: u64) {
        let mut buf = itoa::Buffer::new();
        self.put_raw(tag, buf.format(value).as_bytes());
    }

    /// Appends a field with a single character value.
    #[inline]
    pub fn put_char(&mut self, tag: u32, value: char) {
        let mut buf = [0u8; 4];
        let s = value.encode_utf8(&mut buf);
        self.put_raw(tag, s.as_bytes());
    }

    /// Appends a field with raw bytes.
    #[inline]
    pub fn put_raw(&mut self, tag: u32, value: &[u8]) {
        let mut tag_buf = itoa::Buffer::new();
        self.body.put_slice(tag_buf.format(tag).as_bytes());
        self.body.put_u8(b'=');
        self.body.put_slice(value);
        self.body.put_u8(SOH);
    }

    /// Finalizes the message and returns the complete encoded bytes.
    ///
    /// BodyLength counts the bytes between the BodyLength field's SOH and
    /// the start of `10=`; CheckSum covers everything before `10=`.
    #[must_use]
    pub fn finish(self) -> BytesMut {
        let body_len = self.body.len();

        let mut header = BytesMut::with_capacity(32);
        header.put_slice(b"8=");
        header.put_slice(self.begin_string.as_bytes());
        header.put_u8(SOH);
        header.put_slice(b"9=");

        let mut len_buf = itoa::Buffer::new();
        header.put_slice(len_buf.format(body_len).as_bytes());
        header.put_u8(SOH);

        let mut message = BytesMut::with_capacity(header.len() + body_len + 8);
        message.put_slice(&header);
        message.put_slice(&self.body);

        let checksum = calculate_checksum(&message);
        message.put_slice(b"10=");
        message.put_slice(&format_checksum(checksum));
        message.put_u8(SOH);

        message
    }

    /// Returns the current body length.
    #[inline]
    #[must_use]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Clears the body for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.body.clear();
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new("FIX.4.4")
    }
}
