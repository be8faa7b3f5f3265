/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! # Fixgate Engine
//!
//! Inbound processing engine for the fixgate gateway.
//!
//! This crate provides:
//! - **Pipeline**: Decode, validate, sequence-track, and dispatch one frame
//! - **Session lanes**: Per-session single-task ordering with bounded queues

pub mod lane;
pub mod pipeline;

pub use lane::{LaneClosed, LaneHandle, SessionLane};
pub use pipeline::{Disposition, Pipeline};
