/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Message router.
//!
//! The router maps a [`MsgType`] to a handler. It is built once at startup
//! and is immutable afterwards: a read-only, process-wide mapping that can
//! be shared across session lanes without locking.

use crate::handler::{Handler, HandlerResult};
use fixgate_core::message::{Message, MsgType};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Builder for the handler mapping.
#[derive(Default)]
pub struct RouterBuilder {
    handlers: HashMap<MsgType, Arc<dyn Handler>>,
}

impl RouterBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for a message type.
    ///
    /// Registering the same type twice replaces the earlier handler.
    #[must_use]
    pub fn register(mut self, msg_type: MsgType, handler: Arc<dyn Handler>) -> Self {
        self.handlers.insert(msg_type, handler);
        self
    }

    /// Finalizes the mapping into an immutable [`Router`].
    #[must_use]
    pub fn build(self) -> Router {
        Router {
            handlers: Arc::new(self.handlers),
        }
    }
}

impl std::fmt::Debug for RouterBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterBuilder")
            .field("registered", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Immutable mapping from message type to handler.
#[derive(Clone)]
pub struct Router {
    handlers: Arc<HashMap<MsgType, Arc<dyn Handler>>>,
}

impl Router {
    /// Routes a validated message to its handler.
    ///
    /// Unmapped types return [`HandlerResult::Unhandled`] (logged at warn),
    /// never an error.
    pub async fn dispatch(&self, message: &Message) -> HandlerResult {
        match self.handlers.get(message.msg_type()) {
            Some(handler) => HandlerResult::Handled(handler.handle(message).await),
            None => {
                warn!(msg_type = %message.msg_type(), "no handler registered");
                HandlerResult::Unhandled
            }
        }
    }

    /// Returns true if a handler is registered for the type.
    #[must_use]
    pub fn is_registered(&self, msg_type: &MsgType) -> bool {
        self.handlers.contains_key(msg_type)
    }

    /// Returns the number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("registered", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
