/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Error types for the fixgate FIX engine.
//!
//! The taxonomy follows the recovery policy of the engine: no error in the
//! codec, model, or validator is fatal to the process. Each one is either
//! converted into a structured reject response or logged and skipped. Only
//! a transport failure terminates a session.

use thiserror::Error;

/// Result type alias using [`FixError`] as the error type.
pub type Result<T> = std::result::Result<T, FixError>;

/// Top-level error type for all fixgate operations.
#[derive(Debug, Error)]
pub enum FixError {
    /// Error decoding raw wire bytes.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Error constructing the message model from decoded fields.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Error during message encoding.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// I/O error from the underlying transport.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from decoding malformed wire bytes.
///
/// Always recoverable: a codec error never crashes a session, it marks the
/// inbound frame as garbled.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A field has no `=` separating tag from value.
    #[error("malformed field at byte offset {offset}: missing '='")]
    MalformedField {
        /// Byte offset of the field start within the frame.
        offset: usize,
    },

    /// The tag segment is not a positive integer.
    #[error("invalid tag: {0:?}")]
    InvalidTag(String),

    /// The frame ends in the middle of a field (no terminating SOH).
    #[error("incomplete frame: unterminated field")]
    Incomplete,

    /// Invalid UTF-8 where text was required.
    #[error("invalid utf-8 in field: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// A field value cannot be parsed as the expected type.
    #[error("invalid field value for tag {tag}: {reason}")]
    InvalidFieldValue {
        /// The tag number of the field.
        tag: u32,
        /// Description of why the value is invalid.
        reason: String,
    },

    /// Frame exceeds the maximum allowed size.
    #[error("message too large: {size} bytes exceeds maximum {max_size}")]
    MessageTooLarge {
        /// Actual frame size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max_size: usize,
    },
}

/// Errors from grouping decoded fields into a message.
///
/// Recoverable: a model error triggers a reject response, not a crash.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    /// A structurally required field is absent.
    #[error("missing required field: tag {tag}")]
    MissingRequiredField {
        /// The tag number of the missing field.
        tag: u32,
    },

    /// A field appears after the CheckSum (tag 10) trailer.
    #[error("field after checksum trailer: tag {tag}")]
    TrailerNotLast {
        /// The tag number of the out-of-place field.
        tag: u32,
    },
}

/// Errors that occur during message encoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Field value exceeds maximum length.
    #[error("field value too long for tag {tag}: {length} exceeds max {max_length}")]
    FieldTooLong {
        /// The tag number of the field.
        tag: u32,
        /// Actual length of the value.
        length: usize,
        /// Maximum allowed length.
        max_length: usize,
    },

    /// Invalid field value for encoding.
    #[error("invalid field value for tag {tag}: {reason}")]
    InvalidFieldValue {
        /// The tag number of the field.
        tag: u32,
        /// Description of why the value is invalid.
        reason: String,
    },
}
