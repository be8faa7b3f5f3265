/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! End-to-end message processing pipeline.
//!
//! One [`Pipeline`] owns the full inbound path for a session: decode the
//! frame, validate it, track sequence numbers, and either dispatch to a
//! handler or render a reject response. Every input byte string maps to
//! exactly one [`Disposition`].

use bytes::Bytes;
use fixgate_core::error::CodecError;
use fixgate_core::tags;
use fixgate_dispatch::{HandlerResult, Outcome, Router};
use fixgate_session::{SequenceTracker, SessionConfig};
use fixgate_tagvalue::decoder::{Frame, decode_frame};
use fixgate_validate::{
    Reject, RejectContext, ValidationResult, Validator, ValidatorConfig, build_business_reject,
    build_session_reject,
};
use tracing::{debug, warn};

/// How the pipeline disposed of one inbound message.
#[derive(Debug)]
pub enum Disposition {
    /// The message was valid and a handler processed it.
    Handled(Outcome),
    /// The message was valid but no handler is registered for its type.
    Unhandled,
    /// The message was rejected; the rendered response is ready to send.
    Rejected(Bytes),
    /// The bytes could not be decoded into fields at all.
    Garbled(CodecError),
}

impl Disposition {
    /// Returns true when a handler processed the message.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }

    /// Returns the reject response bytes, if the message was rejected.
    #[must_use]
    pub fn reject_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Rejected(bytes) => Some(bytes),
            _ => None,
        }
    }
}

/// Inbound processing pipeline for one session.
#[derive(Debug)]
pub struct Pipeline {
    validator: Validator,
    router: Router,
    config: SessionConfig,
    sequence: SequenceTracker,
}

impl Pipeline {
    /// Creates a pipeline whose validator follows the session configuration.
    #[must_use]
    pub fn new(config: SessionConfig, router: Router) -> Self {
        let validator_config = ValidatorConfig::new()
            .with_strict_header(config.strict_header)
            .with_body_length_check(config.validate_length)
            .with_checksum_check(config.validate_checksum);
        Self {
            validator: Validator::new(validator_config),
            router,
            config,
            sequence: SequenceTracker::new(),
        }
    }

    /// Replaces the validator, keeping the rest of the pipeline.
    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = validator;
        self
    }

    /// Returns the session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the sequence tracker.
    #[must_use]
    pub fn sequence(&self) -> &SequenceTracker {
        &self.sequence
    }

    /// Processes one raw inbound frame to its disposition.
    ///
    /// Garbled input never takes the reject path: bytes that cannot be
    /// decoded into fields have no seqnum or type to reference, so they
    /// surface as [`Disposition::Garbled`] for the caller to log or drop.
    pub async fn process(&self, raw: &[u8]) -> Disposition {
        if raw.len() > self.config.max_message_size {
            return Disposition::Garbled(CodecError::MessageTooLarge {
                size: raw.len(),
                max_size: self.config.max_message_size,
            });
        }

        let frame = match decode_frame(raw) {
            Ok(frame) => frame,
            Err(err) => {
                warn!(error = %err, "discarding garbled frame");
                return Disposition::Garbled(err);
            }
        };

        match self.validator.validate(&frame) {
            ValidationResult::Valid(message) => {
                if let Some(seq) = message.seq_num() {
                    self.sequence.observe_inbound(seq.value());
                }
                match self.router.dispatch(&message).await {
                    HandlerResult::Handled(outcome) => {
                        debug!(msg_type = %message.msg_type(), "message handled");
                        Disposition::Handled(outcome)
                    }
                    HandlerResult::Unhandled => Disposition::Unhandled,
                }
            }
            ValidationResult::Reject(reject) => {
                debug!(reason = %reject, "rejecting message");
                Disposition::Rejected(self.render_reject(&frame, &reject))
            }
        }
    }

    /// Renders the reject response for a frame that failed validation.
    ///
    /// Reference fields are best effort: whatever the offending frame still
    /// carries (seqnum, type) is echoed back, and a business reject falls
    /// back to a session reject when the frame has no readable MsgType.
    fn render_reject(&self, frame: &Frame<'_>, reject: &Reject) -> Bytes {
        let ref_seq_num = frame
            .field(tags::MSG_SEQ_NUM)
            .and_then(|f| f.as_str().ok())
            .and_then(|s| s.parse::<u64>().ok());
        let ref_msg_type = frame.field(tags::MSG_TYPE).and_then(|f| f.as_str().ok());

        let ctx = RejectContext {
            begin_string: &self.config.begin_string,
            sender_comp_id: self.config.sender_comp_id.as_str(),
            target_comp_id: self.config.target_comp_id.as_str(),
            seq_num: self.sequence.allocate_outbound().value(),
        };

        let bytes = match (reject.is_business(), ref_msg_type) {
            (true, Some(msg_type)) => build_business_reject(&ctx, ref_seq_num, msg_type, reject),
            _ => build_session_reject(&ctx, ref_seq_num, ref_msg_type, reject),
        };
        bytes.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use fixgate_core::message::{Message, MsgType};
    use fixgate_core::types::CompId;
    use fixgate_dispatch::{Handler, RouterBuilder};
    use fixgate_tagvalue::encoder::MessageBuilder;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Handler for CountingHandler {
        async fn handle(&self, _message: &Message) -> Outcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Outcome::Done
        }
    }

    fn session_config() -> SessionConfig {
        SessionConfig::new(
            CompId::new("GATE").unwrap(),
            CompId::new("CLIENT").unwrap(),
            "FIX.4.4",
        )
    }

    fn pipeline_with_counter() -> (Pipeline, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let router = RouterBuilder::new()
            .register(
                MsgType::Heartbeat,
                Arc::new(CountingHandler {
                    calls: Arc::clone(&calls),
                }),
            )
            .build();
        (Pipeline::new(session_config(), router), calls)
    }

    fn heartbeat_wire(seq: u64) -> bytes::BytesMut {
        let mut builder = MessageBuilder::new("FIX.4.4");
        builder.put_str(tags::MSG_TYPE, "0");
        builder.put_uint(tags::MSG_SEQ_NUM, seq);
        builder.finish()
    }

    #[tokio::test]
    async fn test_valid_message_is_handled() {
        let (pipeline, calls) = pipeline_with_counter();
        let wire = heartbeat_wire(1);

        let disposition = pipeline.process(&wire).await;
        assert!(disposition.is_handled());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(pipeline.sequence().expected_inbound(), 2);
    }

    #[tokio::test]
    async fn test_unregistered_type_is_unhandled() {
        let (pipeline, calls) = pipeline_with_counter();
        let mut builder = MessageBuilder::new("FIX.4.4");
        builder.put_str(tags::MSG_TYPE, "A");
        builder.put_uint(tags::MSG_SEQ_NUM, 1);
        let wire = builder.finish();

        let disposition = pipeline.process(&wire).await;
        assert!(matches!(disposition, Disposition::Unhandled));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_garbled_bytes_never_reach_handlers() {
        let (pipeline, calls) = pipeline_with_counter();

        let disposition = pipeline.process(b"8=FIX.4.4\x01garbage\x01").await;
        assert!(matches!(disposition, Disposition::Garbled(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_oversized_frame_is_garbled() {
        let config = session_config().with_max_message_size(16);
        let pipeline = Pipeline::new(config, RouterBuilder::new().build());

        let disposition = pipeline.process(&heartbeat_wire(1)).await;
        assert!(matches!(
            disposition,
            Disposition::Garbled(CodecError::MessageTooLarge { .. })
        ));
    }

    #[tokio::test]
    async fn test_invalid_message_yields_reject_response() {
        let (pipeline, calls) = pipeline_with_counter();
        // Duplicate tag 35 fails validation after decoding cleanly.
        let mut builder = MessageBuilder::new("FIX.4.4");
        builder.put_str(tags::MSG_TYPE, "0");
        builder.put_str(tags::MSG_TYPE, "0");
        builder.put_uint(tags::MSG_SEQ_NUM, 7);
        let wire = builder.finish();

        let disposition = pipeline.process(&wire).await;
        let bytes = disposition.reject_bytes().expect("reject response");
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let frame = decode_frame(bytes).unwrap();
        assert_eq!(frame.field(35).unwrap().as_str().unwrap(), "3");
        assert_eq!(frame.field(49).unwrap().as_str().unwrap(), "GATE");
        assert_eq!(frame.field(56).unwrap().as_str().unwrap(), "CLIENT");
        assert_eq!(frame.field(45).unwrap().as_str().unwrap(), "7");
        assert_eq!(frame.field(34).unwrap().as_str().unwrap(), "1");
    }

    #[tokio::test]
    async fn test_reject_responses_consume_outbound_seqnums() {
        let (pipeline, _) = pipeline_with_counter();
        let mut builder = MessageBuilder::new("FIX.4.4");
        builder.put_str(tags::MSG_TYPE, "0");
        builder.put_str(tags::MSG_TYPE, "0");
        let wire = builder.finish();

        pipeline.process(&wire).await;
        pipeline.process(&wire).await;
        assert_eq!(pipeline.sequence().peek_outbound(), 3);
    }
}
