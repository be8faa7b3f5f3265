/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! # Fixgate Session
//!
//! FIX session identity and sequence tracking for the fixgate engine.
//!
//! This crate provides:
//! - **Session identity**: CompID-pair session keys
//! - **Configuration**: Per-session validation and queue options
//! - **Sequence tracking**: Atomic allocation and gap detection

pub mod config;
pub mod id;
pub mod sequence;

pub use config::SessionConfig;
pub use id::SessionId;
pub use sequence::{SeqCheck, SequenceTracker};
