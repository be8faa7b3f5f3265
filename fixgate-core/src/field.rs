/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Field types for FIX protocol messages.
//!
//! This module provides:
//! - [`FieldTag`]: Type-safe wrapper for FIX field tag numbers
//! - [`Field`]: Owned (tag, value) pair, the atomic unit of the wire format
//! - [`FieldRef`]: Zero-copy reference to a field within a frame buffer

use crate::error::CodecError;
use bytes::Bytes;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// FIX field tag number.
///
/// Tags are positive integers that identify fields within a FIX message.
/// Standard tags are defined in the FIX specification (1-5000 range),
/// while user-defined tags use the 5001+ range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FieldTag(u32);

impl FieldTag {
    /// Creates a new field tag.
    ///
    /// # Arguments
    /// * `tag` - The tag number (must be > 0)
    #[inline]
    #[must_use]
    pub const fn new(tag: u32) -> Self {
        Self(tag)
    }

    /// Returns the raw tag number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns true if this is a standard FIX tag (1-5000).
    #[inline]
    #[must_use]
    pub const fn is_standard(self) -> bool {
        self.0 >= 1 && self.0 <= 5000
    }

    /// Returns true if this is a user-defined tag (5001+).
    #[inline]
    #[must_use]
    pub const fn is_user_defined(self) -> bool {
        self.0 > 5000
    }
}

impl From<u32> for FieldTag {
    fn from(tag: u32) -> Self {
        Self(tag)
    }
}

impl From<FieldTag> for u32 {
    fn from(tag: FieldTag) -> Self {
        tag.0
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Owned FIX field: a (tag, value) pair.
///
/// The value is an opaque byte sequence; typed accessors parse it on demand.
/// Fields compare by tag and value, so the codec round-trip law
/// `decode(encode(fs)) == fs` is directly testable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    /// The field tag number.
    pub tag: u32,
    /// The field value bytes (without delimiters).
    pub value: Bytes,
}

impl Field {
    /// Creates a new field.
    #[inline]
    #[must_use]
    pub const fn new(tag: u32, value: Bytes) -> Self {
        Self { tag, value }
    }

    /// Creates a field from a string value.
    #[must_use]
    pub fn from_str_value(tag: u32, value: &str) -> Self {
        Self {
            tag,
            value: Bytes::copy_from_slice(value.as_bytes()),
        }
    }

    /// Returns the field tag.
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> FieldTag {
        FieldTag(self.tag)
    }

    /// Returns the value as a string slice.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidUtf8` if the value is not valid UTF-8.
    pub fn as_str(&self) -> Result<&str, CodecError> {
        std::str::from_utf8(&self.value).map_err(CodecError::from)
    }

    /// Parses the value as the specified type.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidFieldValue` if parsing fails.
    pub fn parse<T: FromStr>(&self) -> Result<T, CodecError> {
        let s = self.as_str()?;
        s.parse().map_err(|_| CodecError::InvalidFieldValue {
            tag: self.tag,
            reason: format!("failed to parse '{}' as {}", s, std::any::type_name::<T>()),
        })
    }

    /// Returns the value as a u64.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidFieldValue` if the value is not a valid integer.
    pub fn as_u64(&self) -> Result<u64, CodecError> {
        self.parse()
    }

    /// Returns the value as a Decimal.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidFieldValue` if the value is not a valid decimal.
    pub fn as_decimal(&self) -> Result<Decimal, CodecError> {
        self.parse()
    }

    /// Returns the value as a bool (FIX uses 'Y'/'N').
    ///
    /// # Errors
    /// Returns `CodecError::InvalidFieldValue` if the value is not 'Y' or 'N'.
    pub fn as_bool(&self) -> Result<bool, CodecError> {
        match &self.value[..] {
            b"Y" => Ok(true),
            b"N" => Ok(false),
            _ => Err(CodecError::InvalidFieldValue {
                tag: self.tag,
                reason: "expected 'Y' or 'N'".to_string(),
            }),
        }
    }

    /// Returns the value as a single character.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidFieldValue` if the value is not a single ASCII character.
    pub fn as_char(&self) -> Result<char, CodecError> {
        if self.value.len() == 1 && self.value[0].is_ascii() {
            Ok(self.value[0] as char)
        } else {
            Err(CodecError::InvalidFieldValue {
                tag: self.tag,
                reason: "expected single ASCII character".to_string(),
            })
        }
    }

    /// Returns the raw bytes of the value.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.value
    }

    /// Returns true if the value is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.tag, String::from_utf8_lossy(&self.value))
    }
}

/// Zero-copy reference to a field within a frame buffer.
///
/// Used inside the decoder hot path; converted to an owned [`Field`]
/// when the message outlives the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef<'a> {
    /// The field tag number.
    pub tag: u32,
    /// Reference to the field value bytes (without delimiters).
    pub value: &'a [u8],
}

impl<'a> FieldRef<'a> {
    /// Creates a new field reference.
    #[inline]
    #[must_use]
    pub const fn new(tag: u32, value: &'a [u8]) -> Self {
        Self { tag, value }
    }

    /// Returns the value as a string slice.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidUtf8` if the value is not valid UTF-8.
    pub fn as_str(&self) -> Result<&'a str, CodecError> {
        std::str::from_utf8(self.value).map_err(CodecError::from)
    }

    /// Parses the value as the specified type.
    ///
    /// # Errors
    /// Returns `CodecError::InvalidFieldValue` if parsing fails.
    pub fn parse<T: FromStr>(&self) -> Result<T, CodecError> {
        let s = self.as_str()?;
        s.parse().map_err(|_| CodecError::InvalidFieldValue {
            tag: self.tag,
            reason: format!("failed to parse '{}' as {}", s, std::any::type_name::<T>()),
        })
    }

    /// Converts this reference to an owned [`Field`].
    #[must_use]
    pub fn to_owned(&self) -> Field {
        Field {
            tag: self.tag,
            value: Bytes::copy_from_slice(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_tag() {
        let tag = FieldTag::new(35);
        assert_eq!(tag.value(), 35);
        assert!(tag.is_standard());
        assert!(!tag.is_user_defined());

        let user_tag = FieldTag::new(5001);
        assert!(!user_tag.is_standard());
        assert!(user_tag.is_user_defined());
    }

    #[test]
    fn test_field_accessors() {
        let field = Field::from_str_value(38, "100");
        assert_eq!(field.as_str().unwrap(), "100");
        assert_eq!(field.as_u64().unwrap(), 100);
        assert_eq!(field.as_decimal().unwrap(), Decimal::from(100));
    }

    #[test]
    fn test_field_as_bool() {
        assert!(Field::from_str_value(141, "Y").as_bool().unwrap());
        assert!(!Field::from_str_value(141, "N").as_bool().unwrap());
        assert!(Field::from_str_value(141, "X").as_bool().is_err());
    }

    #[test]
    fn test_field_as_char() {
        assert_eq!(Field::from_str_value(54, "1").as_char().unwrap(), '1');
        assert!(Field::from_str_value(54, "12").as_char().is_err());
    }

    #[test]
    fn test_field_invalid_utf8() {
        let field = Field::new(1, Bytes::from_static(&[0xFF, 0xFE]));
        assert!(field.as_str().is_err());
    }

    #[test]
    fn test_field_display() {
        let field = Field::from_str_value(55, "MSFT");
        assert_eq!(field.to_string(), "55=MSFT");
    }

    #[test]
    fn test_field_ref_to_owned() {
        let fref = FieldRef::new(11, b"ORDER123");
        let field = fref.to_owned();
        assert_eq!(field.tag, 11);
        assert_eq!(field.as_str().unwrap(), "ORDER123");
    }
}
