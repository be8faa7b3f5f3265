/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Handler capability for validated messages.

use async_trait::async_trait;
use bytes::Bytes;
use fixgate_core::message::Message;

/// What a handler did with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The message was consumed; nothing to send back.
    Done,
    /// The handler produced an encoded response to write to the transport.
    Reply(Bytes),
}

/// Result of routing a message.
///
/// `Unhandled` is an expected outcome for message types with no registered
/// handler; it is logged, never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResult {
    /// A handler was found and ran.
    Handled(Outcome),
    /// No handler is registered for this message type.
    Unhandled,
}

/// The single polymorphic capability handlers implement.
///
/// New message types are supported by registering a new
/// (MsgType, handler) pair with the router; the dispatch control flow
/// never changes.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Processes one validated message.
    async fn handle(&self, message: &Message) -> Outcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixgate_core::field::Field;

    struct Echo;

    #[async_trait]
    impl Handler for Echo {
        async fn handle(&self, message: &Message) -> Outcome {
            Outcome::Reply(Bytes::from(message.msg_type().as_str().to_string()))
        }
    }

    #[tokio::test]
    async fn test_handler_reply() {
        let fields = vec![
            Field::from_str_value(8, "FIX.4.4"),
            Field::from_str_value(9, "5"),
            Field::from_str_value(35, "0"),
            Field::from_str_value(10, "163"),
        ];
        let message = Message::from_fields(fields).unwrap();
        let outcome = Echo.handle(&message).await;
        assert_eq!(outcome, Outcome::Reply(Bytes::from_static(b"0")));
    }
}
