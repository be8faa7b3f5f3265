/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Reject classification and reject-response construction.
//!
//! A [`Reject`] describes a message that is well-formed on the wire but
//! semantically or structurally invalid. It is a value, not a failure: every
//! reject can be rendered as a FIX Reject (35=3) or BusinessMessageReject
//! (35=j) response for the counterparty.

use bytes::BytesMut;
use fixgate_core::message::Message;
use fixgate_core::tags;
use fixgate_core::types::Timestamp;
use fixgate_tagvalue::encoder::MessageBuilder;
use thiserror::Error;

/// Why an inbound message was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Reject {
    /// Declared BodyLength (tag 9) does not match the actual body bytes.
    #[error("body length mismatch: declared {declared}, actual {actual}")]
    BadBodyLength {
        /// Value declared in tag 9.
        declared: u64,
        /// Recomputed byte length between BodyLength and CheckSum.
        actual: u64,
    },

    /// Declared CheckSum (tag 10) does not match the recomputed sum.
    #[error("checksum mismatch: declared {declared}, calculated {calculated}")]
    BadChecksum {
        /// Value declared in tag 10.
        declared: u8,
        /// Recomputed modulo-256 sum.
        calculated: u8,
    },

    /// Declared CheckSum (tag 10) is not a 3-digit decimal in range.
    #[error("checksum value {0:?} is not a 3-digit decimal")]
    MalformedChecksum(String),

    /// A structurally required field is absent.
    #[error("required field missing: tag {0}")]
    MissingField(u32),

    /// A tag appears more than once.
    #[error("tag {0} appears more than once")]
    DuplicateTag(u32),

    /// A field appears out of required order (e.g. after the trailer).
    #[error("tag {0} out of required order")]
    TagOutOfOrder(u32),

    /// Message type is well-formed but not supported by this engine.
    #[error("unsupported message type: {0}")]
    UnsupportedType(String),

    /// An order-entry business field is missing or invalid.
    #[error("invalid order field {tag}: {reason}")]
    InvalidOrderField {
        /// The offending tag.
        tag: u32,
        /// Why the field was rejected.
        reason: String,
    },
}

impl Reject {
    /// Returns the tag the reject references, if any.
    #[must_use]
    pub fn ref_tag(&self) -> Option<u32> {
        match self {
            Self::BadBodyLength { .. } => Some(tags::BODY_LENGTH),
            Self::BadChecksum { .. } | Self::MalformedChecksum(_) => Some(tags::CHECK_SUM),
            Self::MissingField(tag)
            | Self::DuplicateTag(tag)
            | Self::TagOutOfOrder(tag)
            | Self::InvalidOrderField { tag, .. } => Some(*tag),
            Self::UnsupportedType(_) => Some(tags::MSG_TYPE),
        }
    }

    /// Returns the SessionRejectReason (tag 373) code for this reject.
    #[must_use]
    pub fn session_reject_reason(&self) -> u32 {
        match self {
            Self::MissingField(_) => 1,
            Self::DuplicateTag(_) => 13,
            Self::TagOutOfOrder(_) => 14,
            Self::UnsupportedType(_) => 11,
            Self::BadBodyLength { .. }
            | Self::BadChecksum { .. }
            | Self::MalformedChecksum(_)
            | Self::InvalidOrderField { .. } => 5,
        }
    }

    /// Returns true if this reject is answered with a
    /// BusinessMessageReject (35=j) rather than a session Reject (35=3).
    #[must_use]
    pub fn is_business(&self) -> bool {
        matches!(self, Self::InvalidOrderField { .. })
    }

    /// Returns the BusinessRejectReason (tag 380) code, for business rejects.
    #[must_use]
    pub fn business_reject_reason(&self) -> Option<u32> {
        match self {
            // 5 = conditionally required field missing
            Self::InvalidOrderField { .. } => Some(5),
            _ => None,
        }
    }
}

/// Outcome of validating one message.
///
/// Validation never throws or aborts: every input classifies as either
/// `Valid` or `Reject`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The message passed all checks.
    Valid(Message),
    /// The message was rejected; a response can be built from the reason.
    Reject(Reject),
}

impl ValidationResult {
    /// Returns true for the `Valid` variant.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Outbound identity for reject responses.
///
/// Sender and target are from OUR side's perspective: the inbound message's
/// CompIDs swapped.
#[derive(Debug, Clone, Copy)]
pub struct RejectContext<'a> {
    /// BeginString for the response.
    pub begin_string: &'a str,
    /// Our SenderCompID (tag 49).
    pub sender_comp_id: &'a str,
    /// Counterparty TargetCompID (tag 56).
    pub target_comp_id: &'a str,
    /// Outbound MsgSeqNum (tag 34).
    pub seq_num: u64,
}

/// Builds a session-level Reject (35=3) response.
#[must_use]
pub fn build_session_reject(
    ctx: &RejectContext<'_>,
    ref_seq_num: Option<u64>,
    ref_msg_type: Option<&str>,
    reject: &Reject,
) -> BytesMut {
    let mut builder = MessageBuilder::new(ctx.begin_string);
    builder.put_str(tags::MSG_TYPE, "3");
    put_reject_header(&mut builder, ctx);

    if let Some(seq) = ref_seq_num {
        builder.put_uint(tags::REF_SEQ_NUM, seq);
    }
    if let Some(tag) = reject.ref_tag() {
        builder.put_uint(tags::REF_TAG_ID, u64::from(tag));
    }
    if let Some(msg_type) = ref_msg_type {
        builder.put_str(tags::REF_MSG_TYPE, msg_type);
    }
    builder.put_uint(
        tags::SESSION_REJECT_REASON,
        u64::from(reject.session_reject_reason()),
    );
    builder.put_str(tags::TEXT, &reject.to_string());

    builder.finish()
}

/// Builds a BusinessMessageReject (35=j) response.
#[must_use]
pub fn build_business_reject(
    ctx: &RejectContext<'_>,
    ref_seq_num: Option<u64>,
    ref_msg_type: &str,
    reject: &Reject,
) -> BytesMut {
    let mut builder = MessageBuilder::new(ctx.begin_string);
    builder.put_str(tags::MSG_TYPE, "j");
    put_reject_header(&mut builder, ctx);

    if let Some(seq) = ref_seq_num {
        builder.put_uint(tags::REF_SEQ_NUM, seq);
    }
    builder.put_str(tags::REF_MSG_TYPE, ref_msg_type);
    builder.put_uint(
        tags::BUSINESS_REJECT_REASON,
        u64::from(reject.business_reject_reason().unwrap_or(0)),
    );
    builder.put_str(tags::TEXT, &reject.to_string());

    builder.finish()
}

fn put_reject_header(builder: &mut MessageBuilder, ctx: &RejectContext<'_>) {
    builder.put_str(tags::SENDER_COMP_ID, ctx.sender_comp_id);
    builder.put_str(tags::TARGET_COMP_ID, ctx.target_comp_id);
    builder.put_uint(tags::MSG_SEQ_NUM, ctx.seq_num);
    builder.put_str(tags::SENDING_TIME, &Timestamp::now().format_millis());
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixgate_core::message::MsgType;
    use fixgate_tagvalue::decoder::decode_frame;

    fn ctx() -> RejectContext<'static> {
        RejectContext {
            begin_string: "FIX.4.4",
            sender_comp_id: "US",
            target_comp_id: "THEM",
            seq_num: 9,
        }
    }

    #[test]
    fn test_ref_tags() {
        assert_eq!(
            Reject::BadBodyLength {
                declared: 5,
                actual: 7
            }
            .ref_tag(),
            Some(9)
        );
        assert_eq!(
            Reject::BadChecksum {
                declared: 0,
                calculated: 163
            }
            .ref_tag(),
            Some(10)
        );
        assert_eq!(Reject::MissingField(34).ref_tag(), Some(34));
        assert_eq!(
            Reject::UnsupportedType("ZZ".to_string()).ref_tag(),
            Some(35)
        );
    }

    #[test]
    fn test_reject_reason_codes() {
        assert_eq!(Reject::MissingField(10).session_reject_reason(), 1);
        assert_eq!(Reject::DuplicateTag(55).session_reject_reason(), 13);
        assert_eq!(
            Reject::UnsupportedType("V".to_string()).session_reject_reason(),
            11
        );
    }

    #[test]
    fn test_business_classification() {
        let order = Reject::InvalidOrderField {
            tag: 38,
            reason: "missing".to_string(),
        };
        assert!(order.is_business());
        assert_eq!(order.business_reject_reason(), Some(5));
        assert!(!Reject::MissingField(10).is_business());
    }

    #[test]
    fn test_session_reject_wire_shape() {
        let reject = Reject::DuplicateTag(55);
        let bytes = build_session_reject(&ctx(), Some(3), Some("D"), &reject);
        let frame = decode_frame(&bytes).unwrap();

        assert_eq!(frame.field(35).unwrap().as_str().unwrap(), "3");
        assert_eq!(frame.field(49).unwrap().as_str().unwrap(), "US");
        assert_eq!(frame.field(56).unwrap().as_str().unwrap(), "THEM");
        assert_eq!(frame.field(34).unwrap().as_str().unwrap(), "9");
        assert_eq!(frame.field(45).unwrap().as_str().unwrap(), "3");
        assert_eq!(frame.field(371).unwrap().as_str().unwrap(), "55");
        assert_eq!(frame.field(372).unwrap().as_str().unwrap(), "D");
        assert_eq!(frame.field(373).unwrap().as_str().unwrap(), "13");

        // The built response must itself verify.
        let declared =
            fixgate_tagvalue::parse_checksum(frame.field(10).unwrap().value).unwrap();
        assert_eq!(frame.calculated_checksum(), Some(declared));
    }

    #[test]
    fn test_business_reject_wire_shape() {
        let reject = Reject::InvalidOrderField {
            tag: 38,
            reason: "missing".to_string(),
        };
        let bytes = build_business_reject(&ctx(), Some(12), "D", &reject);
        let frame = decode_frame(&bytes).unwrap();

        assert_eq!(frame.field(35).unwrap().as_str().unwrap(), "j");
        assert_eq!(frame.field(372).unwrap().as_str().unwrap(), "D");
        assert_eq!(frame.field(380).unwrap().as_str().unwrap(), "5");

        let msg =
            fixgate_core::message::Message::from_fields(frame.to_fields()).unwrap();
        assert_eq!(msg.msg_type(), &MsgType::BusinessMessageReject);
    }
}
