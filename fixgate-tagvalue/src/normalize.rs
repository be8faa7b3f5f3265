/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Delimiter normalization for hand-entered messages.
//!
//! Wire FIX separates fields with SOH (0x01), but humans typing test input
//! use printable stand-ins instead. This module detects which delimiter a
//! message uses from its `8=...<delim>9=` prefix and rewrites it to wire
//! form so the rest of the pipeline only ever sees SOH.

use crate::decoder::SOH;
use bytes::BytesMut;

/// Printable delimiters accepted in place of SOH.
pub const DELIMITER_STAND_INS: &[u8] = &[b'|', b'^', b'~', b',', b';', b'\t'];

/// Detects the field delimiter a message uses.
///
/// The delimiter is the byte that terminates the BeginString field, so the
/// input must start with `8=` and the byte after the candidate must begin
/// the BodyLength field (`9=`). Returns `None` when no known delimiter fits
/// that shape.
#[must_use]
pub fn detect_delimiter(input: &[u8]) -> Option<u8> {
    if !input.starts_with(b"8=") {
        return None;
    }

    let pos = input[2..]
        .iter()
        .position(|b| *b == SOH || DELIMITER_STAND_INS.contains(b))?
        + 2;
    if !input[pos + 1..].starts_with(b"9=") {
        return None;
    }
    Some(input[pos])
}

/// Rewrites a message to wire SOH form.
///
/// Every occurrence of the detected delimiter is replaced; input already in
/// SOH form comes back unchanged. Returns `None` when [`detect_delimiter`]
/// cannot identify the delimiter.
#[must_use]
pub fn normalize_delimiters(input: &[u8]) -> Option<BytesMut> {
    let delimiter = detect_delimiter(input)?;
    let mut out = BytesMut::from(input);
    if delimiter != SOH {
        for b in out.as_mut() {
            if *b == delimiter {
                *b = SOH;
            }
        }
    }
    Some(out)
}
