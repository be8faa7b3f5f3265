/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! # Fixgate Tag-Value
//!
//! FIX tag=value encoding and decoding for the fixgate engine.
//!
//! This crate provides parsing and serialization of FIX messages using the
//! standard tag=value format with SOH (0x01) delimiters.
//!
//! ## Guarantees
//!
//! - **Order-preserving**: neither side ever reorders fields
//! - **Total**: `decode` yields a full field sequence or an error, never a
//!   partial result
//! - **Inverse**: `decode(encode(fs)) == fs` for well-formed sequences

pub mod checksum;
pub mod decoder;
pub mod encoder;
pub mod normalize;

pub use checksum::{calculate_checksum, format_checksum, parse_checksum};
pub use decoder::{Decoder, Frame, decode, decode_frame};
pub use encoder::{MessageBuilder, encode};
pub use normalize::{detect_delimiter, normalize_delimiters};
