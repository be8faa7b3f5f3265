/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! # Fixgate Core
//!
//! Core types, traits, and error definitions for the fixgate FIX engine.
//!
//! This crate provides the fundamental building blocks used across all
//! fixgate crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: `FieldTag`, `Field`, `FieldRef`
//! - **Message model**: `Message` (header/body/trailer) and `MsgType`
//! - **Core types**: `SeqNum`, `CompId`, `Side`, `Timestamp`
//! - **Tag constants**: well-known tag numbers in [`tags`]

pub mod error;
pub mod field;
pub mod message;
pub mod tags;
pub mod types;

pub use error::{CodecError, EncodeError, FixError, ModelError, Result};
pub use field::{Field, FieldRef, FieldTag};
pub use message::{Message, MsgType};
pub use types::{CompId, SeqNum, Side, Timestamp};
