/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! # Fixgate
//!
//! A FIX message validation gateway for Rust.
//!
//! Fixgate decodes tag=value frames, validates them against structural and
//! integrity rules, and routes valid messages to typed handlers. Invalid
//! messages become FIX Reject (35=3) or BusinessMessageReject (35=j)
//! responses instead of errors.
//!
//! ## Features
//!
//! - **Zero-copy parsing**: Field values reference the original buffer
//! - **Total validation**: Every input classifies as valid or rejected,
//!   never a panic
//! - **Per-session ordering**: One lane per session keeps processing
//!   sequential under concurrent load
//! - **Async support**: Built on Tokio
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fixgate::prelude::*;
//! use std::sync::Arc;
//!
//! let router = RouterBuilder::new()
//!     .register(MsgType::NewOrderSingle, Arc::new(MyOrderHandler))
//!     .build();
//! let config = SessionConfig::new(
//!     CompId::new("GATE").unwrap(),
//!     CompId::new("CLIENT").unwrap(),
//!     "FIX.4.4",
//! );
//! let pipeline = Pipeline::new(config, router);
//! let (lane, mut outbound) = SessionLane::spawn(pipeline, 256);
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Fundamental types, message model, and error definitions
//! - [`tagvalue`]: Zero-copy tag=value encoding and decoding
//! - [`validate`]: Validation pipeline and reject responses
//! - [`dispatch`]: MsgType routing to async handlers
//! - [`session`]: Session identity and sequence tracking
//! - [`engine`]: Processing pipeline and per-session lanes
//! - [`transport`]: Stream framing

pub mod core {
    //! Core types, message model, and error definitions.
    pub use fixgate_core::*;
}

pub mod tagvalue {
    //! Zero-copy tag=value encoding and decoding.
    pub use fixgate_tagvalue::*;
}

pub mod validate {
    //! Validation pipeline and reject responses.
    pub use fixgate_validate::*;
}

pub mod dispatch {
    //! MsgType routing to async handlers.
    pub use fixgate_dispatch::*;
}

pub mod session {
    //! Session identity and sequence tracking.
    pub use fixgate_session::*;
}

pub mod engine {
    //! Processing pipeline and per-session lanes.
    pub use fixgate_engine::*;
}

pub mod transport {
    //! Stream framing.
    pub use fixgate_transport::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixgate_core::{
        CodecError, CompId, EncodeError, Field, FieldRef, FieldTag, FixError, Message,
        ModelError, MsgType, Result, SeqNum, Side, Timestamp,
    };

    // Tag-value encoding
    pub use fixgate_tagvalue::{
        Decoder, Frame, MessageBuilder, calculate_checksum, decode, decode_frame, encode,
        normalize_delimiters,
    };

    // Validation
    pub use fixgate_validate::{
        Reject, RejectContext, ValidationResult, Validator, ValidatorConfig,
        build_business_reject, build_session_reject,
    };

    // Dispatch
    pub use fixgate_dispatch::{Handler, HandlerResult, Outcome, Router, RouterBuilder};

    // Session
    pub use fixgate_session::{SeqCheck, SequenceTracker, SessionConfig, SessionId};

    // Engine
    pub use fixgate_engine::{Disposition, LaneHandle, Pipeline, SessionLane};

    // Transport
    pub use fixgate_transport::{FrameCodec, TransportError};
}
