/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! # Fixgate Transport
//!
//! Stream framing for fixgate gateways.
//!
//! This crate provides:
//! - **FrameCodec**: Tokio codec splitting TCP streams into whole FIX frames

pub mod codec;

pub use codec::{FrameCodec, TransportError};
