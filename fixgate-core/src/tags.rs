/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Well-known FIX tag numbers used across the engine.

/// BeginString (FIX version), always first.
pub const BEGIN_STRING: u32 = 8;
/// BodyLength, always second.
pub const BODY_LENGTH: u32 = 9;
/// CheckSum, always last.
pub const CHECK_SUM: u32 = 10;
/// ClOrdID - client order identifier.
pub const CL_ORD_ID: u32 = 11;
/// MsgSeqNum - session sequence number.
pub const MSG_SEQ_NUM: u32 = 34;
/// MsgType, always third.
pub const MSG_TYPE: u32 = 35;
/// OrderQty.
pub const ORDER_QTY: u32 = 38;
/// OrdType.
pub const ORD_TYPE: u32 = 40;
/// Price.
pub const PRICE: u32 = 44;
/// RefSeqNum - sequence number of the rejected message.
pub const REF_SEQ_NUM: u32 = 45;
/// SenderCompID.
pub const SENDER_COMP_ID: u32 = 49;
/// SendingTime.
pub const SENDING_TIME: u32 = 52;
/// Side.
pub const SIDE: u32 = 54;
/// Symbol.
pub const SYMBOL: u32 = 55;
/// TargetCompID.
pub const TARGET_COMP_ID: u32 = 56;
/// Text - free-form reject explanation.
pub const TEXT: u32 = 58;
/// RefTagID - tag that caused a session reject.
pub const REF_TAG_ID: u32 = 371;
/// RefMsgType - message type of the rejected message.
pub const REF_MSG_TYPE: u32 = 372;
/// SessionRejectReason.
pub const SESSION_REJECT_REASON: u32 = 373;
/// BusinessRejectReason.
pub const BUSINESS_REJECT_REASON: u32 = 380;

/// Header tags in canonical order after BeginString/BodyLength/MsgType.
///
/// Membership drives the header/body split in the message model.
pub const HEADER_TAGS: &[u32] = &[
    BEGIN_STRING,
    BODY_LENGTH,
    MSG_TYPE,
    MSG_SEQ_NUM,
    43, // PossDupFlag
    SENDER_COMP_ID,
    50, // SenderSubID
    SENDING_TIME,
    TARGET_COMP_ID,
    57,  // TargetSubID
    97,  // PossResend
    115, // OnBehalfOfCompID
    122, // OrigSendingTime
    128, // DeliverToCompID
    142, // SenderLocationID
    143, // TargetLocationID
];

/// Trailer tags: CheckSum plus the optional signature pair.
pub const TRAILER_TAGS: &[u32] = &[CHECK_SUM, 89, 93];

/// Returns true if the tag belongs to the standard message header.
#[inline]
#[must_use]
pub fn is_header_tag(tag: u32) -> bool {
    HEADER_TAGS.contains(&tag)
}

/// Returns true if the tag belongs to the standard message trailer.
#[inline]
#[must_use]
pub fn is_trailer_tag(tag: u32) -> bool {
    TRAILER_TAGS.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_membership() {
        assert!(is_header_tag(BEGIN_STRING));
        assert!(is_header_tag(MSG_SEQ_NUM));
        assert!(!is_header_tag(SYMBOL));
    }

    #[test]
    fn test_trailer_membership() {
        assert!(is_trailer_tag(CHECK_SUM));
        assert!(!is_trailer_tag(MSG_TYPE));
    }
}
