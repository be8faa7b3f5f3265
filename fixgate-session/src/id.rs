/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Session identity.

use fixgate_core::message::Message;

/// Identifies a logical session between two FIX counterparties.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId {
    /// BeginString (FIX version).
    pub begin_string: String,
    /// Sender CompID.
    pub sender_comp_id: String,
    /// Target CompID.
    pub target_comp_id: String,
}

impl SessionId {
    /// Creates a new session ID.
    #[must_use]
    pub fn new(
        begin_string: impl Into<String>,
        sender_comp_id: impl Into<String>,
        target_comp_id: impl Into<String>,
    ) -> Self {
        Self {
            begin_string: begin_string.into(),
            sender_comp_id: sender_comp_id.into(),
            target_comp_id: target_comp_id.into(),
        }
    }

    /// Derives OUR session identity from an inbound message: the
    /// counterparty's CompIDs swapped.
    #[must_use]
    pub fn from_inbound(message: &Message) -> Option<Self> {
        Some(Self::new(
            message.begin_string()?,
            message.target_comp_id()?,
            message.sender_comp_id()?,
        ))
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}->{}",
            self.begin_string, self.sender_comp_id, self.target_comp_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixgate_core::field::Field;

    #[test]
    fn test_session_id_display() {
        let id = SessionId::new("FIX.4.4", "SENDER", "TARGET");
        assert_eq!(id.to_string(), "FIX.4.4:SENDER->TARGET");
    }

    #[test]
    fn test_from_inbound_swaps_comp_ids() {
        let fields = vec![
            Field::from_str_value(8, "FIX.4.4"),
            Field::from_str_value(9, "20"),
            Field::from_str_value(35, "0"),
            Field::from_str_value(49, "THEM"),
            Field::from_str_value(56, "US"),
            Field::from_str_value(10, "000"),
        ];
        let message = Message::from_fields(fields).unwrap();
        let id = SessionId::from_inbound(&message).unwrap();
        assert_eq!(id.sender_comp_id, "US");
        assert_eq!(id.target_comp_id, "THEM");
    }
}
