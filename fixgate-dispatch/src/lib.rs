/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! # Fixgate Dispatch
//!
//! Message type routing for the fixgate engine.
//!
//! This crate provides:
//! - **Handler trait**: the single async capability over validated messages
//! - **Router**: immutable MsgType-to-handler mapping, built once at startup

pub mod handler;
pub mod router;

pub use handler::{Handler, HandlerResult, Outcome};
pub use router::{Router, RouterBuilder};
