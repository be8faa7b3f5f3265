/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Message validation pipeline.
//!
//! The validator is state-machine-free: a pure function pipeline over one
//! decoded frame. Checks run in a fixed order (structural, then integrity,
//! then type and order semantics) and the first failure wins. The result is
//! always `Valid` or `Reject`, never a panic or abort.

use crate::reject::{Reject, ValidationResult};
use fixgate_core::error::ModelError;
use fixgate_core::message::{Message, MsgType};
use fixgate_core::tags;
use fixgate_core::types::Side;
use fixgate_tagvalue::checksum::parse_checksum;
use fixgate_tagvalue::decoder::Frame;
use std::collections::HashSet;

/// Configuration for the validation pipeline.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Require MsgSeqNum (34), SenderCompID (49), and TargetCompID (56)
    /// in addition to the always-required 8/9/35/10.
    pub strict_header: bool,
    /// Recompute and compare BodyLength.
    pub check_body_length: bool,
    /// Recompute and compare CheckSum.
    pub check_checksum: bool,
    /// Message types this engine accepts. Anything else is rejected as
    /// `UnsupportedType`, which is still answerable with a FIX Reject.
    pub supported_types: HashSet<MsgType>,
}

impl ValidatorConfig {
    /// Creates a configuration with the default supported-type set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strict_header: false,
            check_body_length: true,
            check_checksum: true,
            supported_types: default_supported_types(),
        }
    }

    /// Sets strict header validation.
    #[must_use]
    pub fn with_strict_header(mut self, strict: bool) -> Self {
        self.strict_header = strict;
        self
    }

    /// Sets whether to verify BodyLength.
    #[must_use]
    pub fn with_body_length_check(mut self, check: bool) -> Self {
        self.check_body_length = check;
        self
    }

    /// Sets whether to verify CheckSum.
    #[must_use]
    pub fn with_checksum_check(mut self, check: bool) -> Self {
        self.check_checksum = check;
        self
    }

    /// Adds a message type to the supported set.
    #[must_use]
    pub fn with_supported_type(mut self, msg_type: MsgType) -> Self {
        self.supported_types.insert(msg_type);
        self
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The message types accepted out of the box: the session-level set plus
/// the order-entry messages this engine models.
#[must_use]
pub fn default_supported_types() -> HashSet<MsgType> {
    HashSet::from([
        MsgType::Heartbeat,
        MsgType::TestRequest,
        MsgType::ResendRequest,
        MsgType::Reject,
        MsgType::SequenceReset,
        MsgType::Logout,
        MsgType::Logon,
        MsgType::ExecutionReport,
        MsgType::OrderCancelReject,
        MsgType::NewOrderSingle,
        MsgType::OrderCancelRequest,
        MsgType::OrderCancelReplaceRequest,
        MsgType::OrderStatusRequest,
        MsgType::BusinessMessageReject,
    ])
}

/// Pure validation pipeline over decoded frames.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the validator configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Classifies one decoded frame as `Valid` or `Reject`.
    #[must_use]
    pub fn validate(&self, frame: &Frame<'_>) -> ValidationResult {
        // 1. Structural: required header/trailer fields, trailer last.
        let message = match Message::from_fields(frame.to_fields()) {
            Ok(message) => message,
            Err(ModelError::MissingRequiredField { tag }) => {
                return ValidationResult::Reject(Reject::MissingField(tag));
            }
            Err(ModelError::TrailerNotLast { tag }) => {
                return ValidationResult::Reject(Reject::TagOutOfOrder(tag));
            }
        };

        if self.config.strict_header {
            for tag in [tags::MSG_SEQ_NUM, tags::SENDER_COMP_ID, tags::TARGET_COMP_ID] {
                if frame.field(tag).is_none() {
                    return ValidationResult::Reject(Reject::MissingField(tag));
                }
            }
        }

        // 2. Duplicates are rejected here, never silently collapsed.
        if let Some(tag) = first_duplicate_tag(frame) {
            return ValidationResult::Reject(Reject::DuplicateTag(tag));
        }

        // 3. Body length.
        if self.config.check_body_length {
            if let Some(reject) = self.check_body_length(frame) {
                return ValidationResult::Reject(reject);
            }
        }

        // 4. Checksum.
        if self.config.check_checksum {
            if let Some(reject) = self.check_checksum(frame) {
                return ValidationResult::Reject(reject);
            }
        }

        // 5. Message type.
        if !self.config.supported_types.contains(message.msg_type()) {
            return ValidationResult::Reject(Reject::UnsupportedType(
                message.msg_type().as_str().to_string(),
            ));
        }

        // 6. Order semantics.
        if message.msg_type().is_order() {
            if let Some(reject) = check_order_fields(&message) {
                return ValidationResult::Reject(reject);
            }
        }

        ValidationResult::Valid(message)
    }

    fn check_body_length(&self, frame: &Frame<'_>) -> Option<Reject> {
        let actual = frame.actual_body_length()? as u64;
        let declared = frame
            .field(tags::BODY_LENGTH)
            .and_then(|f| f.parse::<u64>().ok())
            .unwrap_or(0);

        if declared != actual {
            return Some(Reject::BadBodyLength { declared, actual });
        }
        None
    }

    fn check_checksum(&self, frame: &Frame<'_>) -> Option<Reject> {
        let calculated = frame.calculated_checksum()?;
        let field = frame.field(tags::CHECK_SUM)?;
        // An unparseable value is its own reject; it must never compare
        // equal to any calculated sum.
        let Some(declared) = parse_checksum(field.value) else {
            return Some(Reject::MalformedChecksum(
                String::from_utf8_lossy(field.value).into_owned(),
            ));
        };

        if declared != calculated {
            return Some(Reject::BadChecksum {
                declared,
                calculated,
            });
        }
        None
    }
}

/// Returns the first tag that appears more than once in the frame.
fn first_duplicate_tag(frame: &Frame<'_>) -> Option<u32> {
    let mut seen = HashSet::with_capacity(frame.fields().len());
    for field in frame.fields() {
        if !seen.insert(field.tag) {
            return Some(field.tag);
        }
    }
    None
}

/// Semantic checks for order-entry messages: required business fields
/// present and well-typed.
fn check_order_fields(message: &Message) -> Option<Reject> {
    let mut required = vec![tags::CL_ORD_ID, tags::SYMBOL, tags::SIDE, tags::ORDER_QTY];
    if message.msg_type() == &MsgType::NewOrderSingle {
        required.push(tags::ORD_TYPE);
    }

    for tag in required {
        let Some(field) = message.field(tag) else {
            return Some(Reject::InvalidOrderField {
                tag,
                reason: "missing".to_string(),
            });
        };
        if field.is_empty() {
            return Some(Reject::InvalidOrderField {
                tag,
                reason: "empty".to_string(),
            });
        }
    }

    let side = message.field(tags::SIDE)?;
    match side.as_char() {
        Ok(c) if Side::from_char(c).is_some() => {}
        _ => {
            return Some(Reject::InvalidOrderField {
                tag: tags::SIDE,
                reason: "not a valid side".to_string(),
            });
        }
    }

    let qty = message.field(tags::ORDER_QTY)?;
    match qty.as_decimal() {
        Ok(d) if d > rust_decimal::Decimal::ZERO => None,
        Ok(_) => Some(Reject::InvalidOrderField {
            tag: tags::ORDER_QTY,
            reason: "must be positive".to_string(),
        }),
        Err(_) => Some(Reject::InvalidOrderField {
            tag: tags::ORDER_QTY,
            reason: "not a decimal".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixgate_tagvalue::checksum::calculate_checksum;
    use fixgate_tagvalue::decoder::decode_frame;
    use fixgate_tagvalue::encoder::MessageBuilder;

    /// Builds a wire message with correct BodyLength and CheckSum.
    fn wire(begin_string: &str, body_fields: &[(u32, &str)]) -> Vec<u8> {
        let mut builder = MessageBuilder::new(begin_string);
        for (tag, value) in body_fields {
            builder.put_str(*tag, value);
        }
        builder.finish().to_vec()
    }

    fn order_body<'a>() -> Vec<(u32, &'a str)> {
        vec![
            (35, "D"),
            (49, "SENDER"),
            (56, "TARGET"),
            (34, "4"),
            (11, "ORD1"),
            (55, "MSFT"),
            (54, "1"),
            (38, "100"),
            (40, "2"),
            (44, "25.50"),
        ]
    }

    fn validate(raw: &[u8]) -> ValidationResult {
        let frame = decode_frame(raw).unwrap();
        Validator::default().validate(&frame)
    }

    #[test]
    fn test_valid_heartbeat() {
        let raw = wire("FIX.4.4", &[(35, "0"), (49, "A"), (56, "B"), (34, "1")]);
        let result = validate(&raw);
        let ValidationResult::Valid(msg) = result else {
            panic!("expected valid, got {result:?}");
        };
        assert_eq!(msg.msg_type(), &MsgType::Heartbeat);
    }

    #[test]
    fn test_valid_new_order_single() {
        let raw = wire("FIX.4.2", &order_body());
        assert!(validate(&raw).is_valid());
    }

    #[test]
    fn test_missing_checksum_is_structural() {
        let raw = b"8=FIX.4.4\x019=5\x0135=0\x01";
        let result = validate(raw);
        assert_eq!(result, ValidationResult::Reject(Reject::MissingField(10)));
    }

    #[test]
    fn test_bad_body_length() {
        // Body is "35=0\x01" (5 bytes) but tag 9 declares 4.
        let raw = b"8=FIX.4.2\x019=4\x0135=0\x0110=000\x01";
        let result = validate(raw);
        assert_eq!(
            result,
            ValidationResult::Reject(Reject::BadBodyLength {
                declared: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_length_checked_before_checksum() {
        // Both integrity fields are wrong; the length reject wins.
        let raw = b"8=FIX.4.2\x019=99\x0135=0\x0110=000\x01";
        assert!(matches!(
            validate(raw),
            ValidationResult::Reject(Reject::BadBodyLength { .. })
        ));
    }

    #[test]
    fn test_bad_checksum() {
        let mut raw = wire("FIX.4.4", &[(35, "0"), (34, "1")]);
        // Replace the declared checksum with a parseable wrong value.
        let n = raw.len();
        let calculated = calculate_checksum(&raw[..n - 7]);
        let wrong = calculated.wrapping_add(1);
        raw[n - 4..n - 1].copy_from_slice(&fixgate_tagvalue::format_checksum(wrong));

        let result = validate(&raw);
        assert_eq!(
            result,
            ValidationResult::Reject(Reject::BadChecksum {
                declared: wrong,
                calculated,
            })
        );
    }

    #[test]
    fn test_malformed_checksum_never_matches() {
        // "999" is out of range; it must reject even if the calculated sum
        // were zero, so it gets its own classification.
        let mut raw = wire("FIX.4.4", &[(35, "0"), (34, "1")]);
        let n = raw.len();
        raw[n - 4..n - 1].copy_from_slice(b"999");
        assert_eq!(
            validate(&raw),
            ValidationResult::Reject(Reject::MalformedChecksum("999".to_string()))
        );

        let mut raw = wire("FIX.4.4", &[(35, "0"), (34, "1")]);
        let n = raw.len();
        raw[n - 4..n - 1].copy_from_slice(b"XYZ");
        assert_eq!(
            validate(&raw),
            ValidationResult::Reject(Reject::MalformedChecksum("XYZ".to_string()))
        );
    }

    #[test]
    fn test_duplicate_tag() {
        let raw = wire("FIX.4.4", &[(35, "0"), (34, "1"), (58, "a"), (58, "b")]);
        assert_eq!(
            validate(&raw),
            ValidationResult::Reject(Reject::DuplicateTag(58))
        );
    }

    #[test]
    fn test_unsupported_type() {
        let raw = wire("FIX.4.4", &[(35, "ZZ"), (34, "1")]);
        assert_eq!(
            validate(&raw),
            ValidationResult::Reject(Reject::UnsupportedType("ZZ".to_string()))
        );
    }

    #[test]
    fn test_known_type_outside_supported_set() {
        let config = ValidatorConfig::new();
        let mut config = config;
        config.supported_types.remove(&MsgType::NewOrderSingle);
        let validator = Validator::new(config);

        let raw = wire("FIX.4.2", &order_body());
        let frame = decode_frame(&raw).unwrap();
        assert_eq!(
            validator.validate(&frame),
            ValidationResult::Reject(Reject::UnsupportedType("D".to_string()))
        );
    }

    #[test]
    fn test_order_missing_quantity() {
        let mut body = order_body();
        body.retain(|(tag, _)| *tag != 38);
        let raw = wire("FIX.4.2", &body);
        assert_eq!(
            validate(&raw),
            ValidationResult::Reject(Reject::InvalidOrderField {
                tag: 38,
                reason: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_order_negative_quantity() {
        let mut body = order_body();
        for field in &mut body {
            if field.0 == 38 {
                field.1 = "-5";
            }
        }
        let raw = wire("FIX.4.2", &body);
        assert_eq!(
            validate(&raw),
            ValidationResult::Reject(Reject::InvalidOrderField {
                tag: 38,
                reason: "must be positive".to_string()
            })
        );
    }

    #[test]
    fn test_order_invalid_side() {
        let mut body = order_body();
        for field in &mut body {
            if field.0 == 54 {
                field.1 = "X";
            }
        }
        let raw = wire("FIX.4.2", &body);
        assert_eq!(
            validate(&raw),
            ValidationResult::Reject(Reject::InvalidOrderField {
                tag: 54,
                reason: "not a valid side".to_string()
            })
        );
    }

    #[test]
    fn test_strict_header_requires_comp_ids() {
        let config = ValidatorConfig::new().with_strict_header(true);
        let validator = Validator::new(config);

        let raw = wire("FIX.4.4", &[(35, "0"), (34, "1"), (49, "A")]);
        let frame = decode_frame(&raw).unwrap();
        assert_eq!(
            validator.validate(&frame),
            ValidationResult::Reject(Reject::MissingField(56))
        );
    }

    #[test]
    fn test_checks_can_be_disabled() {
        let config = ValidatorConfig::new()
            .with_body_length_check(false)
            .with_checksum_check(false);
        let validator = Validator::new(config);

        let raw = b"8=FIX.4.2\x019=99\x0135=0\x0110=000\x01";
        let frame = decode_frame(raw).unwrap();
        assert!(validator.validate(&frame).is_valid());
    }
}
