/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Message model for FIX protocol.
//!
//! This module provides:
//! - [`MsgType`]: Closed enumeration of supported FIX message types
//! - [`Message`]: Ordered fields partitioned into header, body, and trailer
//!
//! A [`Message`] is constructed fresh per decode and never mutated in place;
//! "modifying" a message means building a new one from an edited field
//! vector.

use crate::error::ModelError;
use crate::field::Field;
use crate::tags;
use crate::types::SeqNum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// FIX message types understood by the engine.
///
/// This is a closed tagged-variant type rather than a string lookup, so
/// unknown or unsupported types are a first-class, testable outcome.
/// Values not covered here map to [`MsgType::Unknown`], never a failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MsgType {
    /// Heartbeat (0) - Session level.
    #[default]
    Heartbeat,
    /// Test Request (1) - Session level.
    TestRequest,
    /// Resend Request (2) - Session level.
    ResendRequest,
    /// Reject (3) - Session level.
    Reject,
    /// Sequence Reset (4) - Session level.
    SequenceReset,
    /// Logout (5) - Session level.
    Logout,
    /// Execution Report (8).
    ExecutionReport,
    /// Order Cancel Reject (9).
    OrderCancelReject,
    /// Logon (A) - Session level.
    Logon,
    /// New Order Single (D).
    NewOrderSingle,
    /// Order Cancel Request (F).
    OrderCancelRequest,
    /// Order Cancel/Replace Request (G).
    OrderCancelReplaceRequest,
    /// Order Status Request (H).
    OrderStatusRequest,
    /// Business Message Reject (j).
    BusinessMessageReject,
    /// Any message type the engine does not model.
    Unknown(String),
}

impl std::str::FromStr for MsgType {
    type Err = std::convert::Infallible;

    /// Resolves a MsgType from the tag 35 value (e.g., "D" for NewOrderSingle).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "0" => Self::Heartbeat,
            "1" => Self::TestRequest,
            "2" => Self::ResendRequest,
            "3" => Self::Reject,
            "4" => Self::SequenceReset,
            "5" => Self::Logout,
            "8" => Self::ExecutionReport,
            "9" => Self::OrderCancelReject,
            "A" => Self::Logon,
            "D" => Self::NewOrderSingle,
            "F" => Self::OrderCancelRequest,
            "G" => Self::OrderCancelReplaceRequest,
            "H" => Self::OrderStatusRequest,
            "j" => Self::BusinessMessageReject,
            other => Self::Unknown(other.to_string()),
        })
    }
}

impl MsgType {
    /// Returns the wire representation of this message type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Heartbeat => "0",
            Self::TestRequest => "1",
            Self::ResendRequest => "2",
            Self::Reject => "3",
            Self::SequenceReset => "4",
            Self::Logout => "5",
            Self::ExecutionReport => "8",
            Self::OrderCancelReject => "9",
            Self::Logon => "A",
            Self::NewOrderSingle => "D",
            Self::OrderCancelRequest => "F",
            Self::OrderCancelReplaceRequest => "G",
            Self::OrderStatusRequest => "H",
            Self::BusinessMessageReject => "j",
            Self::Unknown(s) => s.as_str(),
        }
    }

    /// Returns true if this is an administrative (session-level) message.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Self::Heartbeat
                | Self::TestRequest
                | Self::ResendRequest
                | Self::Reject
                | Self::SequenceReset
                | Self::Logout
                | Self::Logon
        )
    }

    /// Returns true if this is an application message.
    #[must_use]
    pub fn is_app(&self) -> bool {
        !self.is_admin()
    }

    /// Returns true for order-entry messages that carry business fields
    /// (ClOrdID, Symbol, Side, OrderQty) subject to semantic validation.
    #[must_use]
    pub fn is_order(&self) -> bool {
        matches!(
            self,
            Self::NewOrderSingle | Self::OrderCancelRequest | Self::OrderCancelReplaceRequest
        )
    }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A FIX message: an ordered field sequence partitioned into header, body,
/// and trailer.
///
/// The header is stored in canonical wire order (8, 9, 35, then remaining
/// header fields in decoded order); the body keeps its original relative
/// order; the trailer keeps CheckSum last. [`Message::to_fields`] is
/// therefore a faithful reconstruction of the wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    header: Vec<Field>,
    body: Vec<Field>,
    trailer: Vec<Field>,
    msg_type: MsgType,
}

impl Message {
    /// Groups an ordered field sequence into a message.
    ///
    /// # Errors
    /// - `ModelError::MissingRequiredField` if BeginString (8), BodyLength
    ///   (9), MsgType (35), or CheckSum (10) is absent.
    /// - `ModelError::TrailerNotLast` if any field follows CheckSum.
    pub fn from_fields(fields: Vec<Field>) -> Result<Self, ModelError> {
        for required in [
            tags::BEGIN_STRING,
            tags::BODY_LENGTH,
            tags::MSG_TYPE,
            tags::CHECK_SUM,
        ] {
            if !fields.iter().any(|f| f.tag == required) {
                return Err(ModelError::MissingRequiredField { tag: required });
            }
        }

        if let Some(pos) = fields.iter().position(|f| f.tag == tags::CHECK_SUM) {
            if let Some(stray) = fields.get(pos + 1) {
                return Err(ModelError::TrailerNotLast { tag: stray.tag });
            }
        }

        let msg_type = fields
            .iter()
            .find(|f| f.tag == tags::MSG_TYPE)
            .map(|f| {
                String::from_utf8_lossy(&f.value)
                    .parse::<MsgType>()
                    .unwrap_or_default()
            })
            .unwrap_or_default();

        // Canonical header order: 8, 9, 35, then remaining header fields
        // in their decoded relative order.
        let mut header = Vec::with_capacity(8);
        for leading in [tags::BEGIN_STRING, tags::BODY_LENGTH, tags::MSG_TYPE] {
            if let Some(f) = fields.iter().find(|f| f.tag == leading) {
                header.push(f.clone());
            }
        }

        let mut body = Vec::new();
        let mut trailer = Vec::new();
        for field in fields {
            match field.tag {
                tags::BEGIN_STRING | tags::BODY_LENGTH | tags::MSG_TYPE => {}
                t if tags::is_trailer_tag(t) => trailer.push(field),
                t if tags::is_header_tag(t) => header.push(field),
                _ => body.push(field),
            }
        }

        // CheckSum must close the trailer.
        trailer.sort_by_key(|f| u32::from(f.tag == tags::CHECK_SUM));

        Ok(Self {
            header,
            body,
            trailer,
            msg_type,
        })
    }

    /// Reconstructs the wire-ordered field sequence.
    #[must_use]
    pub fn to_fields(&self) -> Vec<Field> {
        let mut fields =
            Vec::with_capacity(self.header.len() + self.body.len() + self.trailer.len());
        fields.extend(self.header.iter().cloned());
        fields.extend(self.body.iter().cloned());
        fields.extend(self.trailer.iter().cloned());
        fields
    }

    /// Returns the message type.
    #[inline]
    #[must_use]
    pub fn msg_type(&self) -> &MsgType {
        &self.msg_type
    }

    /// Returns the MsgSeqNum (tag 34), if present and numeric.
    #[must_use]
    pub fn seq_num(&self) -> Option<SeqNum> {
        self.field(tags::MSG_SEQ_NUM)
            .and_then(|f| f.as_u64().ok())
            .map(SeqNum::new)
    }

    /// Returns the BeginString (tag 8) value.
    #[must_use]
    pub fn begin_string(&self) -> Option<&str> {
        self.field(tags::BEGIN_STRING).and_then(|f| f.as_str().ok())
    }

    /// Returns the SenderCompID (tag 49) value.
    #[must_use]
    pub fn sender_comp_id(&self) -> Option<&str> {
        self.field(tags::SENDER_COMP_ID)
            .and_then(|f| f.as_str().ok())
    }

    /// Returns the TargetCompID (tag 56) value.
    #[must_use]
    pub fn target_comp_id(&self) -> Option<&str> {
        self.field(tags::TARGET_COMP_ID)
            .and_then(|f| f.as_str().ok())
    }

    /// Looks up a field by tag number.
    ///
    /// Returns the first match in wire order. Duplicate tags are not
    /// collapsed here; the validator rejects them.
    #[must_use]
    pub fn field(&self, tag: u32) -> Option<&Field> {
        self.fields().find(|f| f.tag == tag)
    }

    /// Iterates over all fields in wire order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.header
            .iter()
            .chain(self.body.iter())
            .chain(self.trailer.iter())
    }

    /// Returns the number of fields in the message.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.header.len() + self.body.len() + self.trailer.len()
    }

    /// Returns the header fields in canonical order.
    #[inline]
    #[must_use]
    pub fn header(&self) -> &[Field] {
        &self.header
    }

    /// Returns the body fields in original relative order.
    #[inline]
    #[must_use]
    pub fn body(&self) -> &[Field] {
        &self.body
    }

    /// Returns the trailer fields, CheckSum last.
    #[inline]
    #[must_use]
    pub fn trailer(&self) -> &[Field] {
        &self.trailer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(tag: u32, value: &str) -> Field {
        Field::from_str_value(tag, value)
    }

    fn heartbeat_fields() -> Vec<Field> {
        vec![
            f(8, "FIX.4.4"),
            f(9, "5"),
            f(35, "0"),
            f(34, "7"),
            f(49, "SENDER"),
            f(56, "TARGET"),
            f(10, "123"),
        ]
    }

    #[test]
    fn test_msg_type_from_str() {
        assert_eq!("0".parse::<MsgType>().unwrap(), MsgType::Heartbeat);
        assert_eq!("D".parse::<MsgType>().unwrap(), MsgType::NewOrderSingle);
        assert_eq!("8".parse::<MsgType>().unwrap(), MsgType::ExecutionReport);
        assert_eq!(
            "j".parse::<MsgType>().unwrap(),
            MsgType::BusinessMessageReject
        );
    }

    #[test]
    fn test_msg_type_unknown_never_fails() {
        let t: MsgType = "ZZ".parse().unwrap();
        assert_eq!(t, MsgType::Unknown("ZZ".to_string()));
        assert_eq!(t.as_str(), "ZZ");
    }

    #[test]
    fn test_msg_type_classification() {
        assert!(MsgType::Heartbeat.is_admin());
        assert!(MsgType::Logon.is_admin());
        assert!(MsgType::NewOrderSingle.is_app());
        assert!(MsgType::NewOrderSingle.is_order());
        assert!(MsgType::OrderCancelRequest.is_order());
        assert!(!MsgType::ExecutionReport.is_order());
    }

    #[test]
    fn test_from_fields_partition() {
        let msg = Message::from_fields(heartbeat_fields()).unwrap();
        assert_eq!(msg.msg_type(), &MsgType::Heartbeat);
        assert_eq!(msg.header().len(), 6);
        assert!(msg.body().is_empty());
        assert_eq!(msg.trailer().len(), 1);
        assert_eq!(msg.seq_num().unwrap().value(), 7);
        assert_eq!(msg.sender_comp_id(), Some("SENDER"));
        assert_eq!(msg.target_comp_id(), Some("TARGET"));
    }

    #[test]
    fn test_from_fields_missing_checksum() {
        let mut fields = heartbeat_fields();
        fields.retain(|f| f.tag != 10);
        let err = Message::from_fields(fields).unwrap_err();
        assert_eq!(err, ModelError::MissingRequiredField { tag: 10 });
    }

    #[test]
    fn test_from_fields_missing_msg_type() {
        let mut fields = heartbeat_fields();
        fields.retain(|f| f.tag != 35);
        let err = Message::from_fields(fields).unwrap_err();
        assert_eq!(err, ModelError::MissingRequiredField { tag: 35 });
    }

    #[test]
    fn test_from_fields_trailer_not_last() {
        let mut fields = heartbeat_fields();
        fields.push(f(58, "stray"));
        let err = Message::from_fields(fields).unwrap_err();
        assert_eq!(err, ModelError::TrailerNotLast { tag: 58 });
    }

    #[test]
    fn test_to_fields_reconstructs_wire_order() {
        let fields = vec![
            f(8, "FIX.4.4"),
            f(9, "30"),
            f(35, "D"),
            f(49, "SENDER"),
            f(56, "TARGET"),
            f(11, "ORD1"),
            f(55, "MSFT"),
            f(54, "1"),
            f(38, "100"),
            f(10, "042"),
        ];
        let msg = Message::from_fields(fields.clone()).unwrap();
        assert_eq!(msg.to_fields(), fields);
    }

    #[test]
    fn test_field_lookup_first_match() {
        let msg = Message::from_fields(heartbeat_fields()).unwrap();
        assert_eq!(msg.field(49).unwrap().as_str().unwrap(), "SENDER");
        assert!(msg.field(9999).is_none());
    }
}
