/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! # Fixgate Validate
//!
//! Message validation pipeline and reject handling for the fixgate engine.
//!
//! This crate provides:
//! - **Validator**: structural, integrity, type, and order-semantic checks
//! - **Reject taxonomy**: structured reasons, never a crash
//! - **Reject responses**: FIX Reject (35=3) and BusinessMessageReject
//!   (35=j) construction

pub mod reject;
pub mod validator;

pub use reject::{
    Reject, RejectContext, ValidationResult, build_business_reject, build_session_reject,
};
pub use validator::{Validator, ValidatorConfig, default_supported_types};
