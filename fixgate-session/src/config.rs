/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Session configuration.

use fixgate_core::types::CompId;

/// Configuration for one FIX session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Our SenderCompID (tag 49 on outbound messages).
    pub sender_comp_id: CompId,
    /// Counterparty TargetCompID (tag 56 on outbound messages).
    pub target_comp_id: CompId,
    /// FIX version BeginString (e.g., "FIX.4.4").
    pub begin_string: String,
    /// Whether to verify incoming message checksums.
    pub validate_checksum: bool,
    /// Whether to verify incoming BodyLength.
    pub validate_length: bool,
    /// Whether MsgSeqNum/SenderCompID/TargetCompID are required inbound.
    pub strict_header: bool,
    /// Maximum inbound message size in bytes.
    pub max_message_size: usize,
    /// Capacity of the session lane's inbound queue.
    pub lane_capacity: usize,
}

impl SessionConfig {
    /// Creates a session configuration with defaults.
    #[must_use]
    pub fn new(
        sender_comp_id: CompId,
        target_comp_id: CompId,
        begin_string: impl Into<String>,
    ) -> Self {
        Self {
            sender_comp_id,
            target_comp_id,
            begin_string: begin_string.into(),
            validate_checksum: true,
            validate_length: true,
            strict_header: false,
            max_message_size: 1024 * 1024, // 1MB
            lane_capacity: 256,
        }
    }

    /// Sets whether to verify incoming checksums.
    #[must_use]
    pub const fn with_validate_checksum(mut self, validate: bool) -> Self {
        self.validate_checksum = validate;
        self
    }

    /// Sets whether to verify incoming BodyLength.
    #[must_use]
    pub const fn with_validate_length(mut self, validate: bool) -> Self {
        self.validate_length = validate;
        self
    }

    /// Sets strict header validation.
    #[must_use]
    pub const fn with_strict_header(mut self, strict: bool) -> Self {
        self.strict_header = strict;
        self
    }

    /// Sets the maximum inbound message size.
    #[must_use]
    pub const fn with_max_message_size(mut self, size: usize) -> Self {
        self.max_message_size = size;
        self
    }

    /// Sets the lane queue capacity.
    #[must_use]
    pub const fn with_lane_capacity(mut self, capacity: usize) -> Self {
        self.lane_capacity = capacity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::new(
            CompId::new("SENDER").unwrap(),
            CompId::new("TARGET").unwrap(),
            "FIX.4.4",
        );
        assert_eq!(config.begin_string, "FIX.4.4");
        assert!(config.validate_checksum);
        assert!(config.validate_length);
        assert!(!config.strict_header);
        assert_eq!(config.max_message_size, 1024 * 1024);
    }

    #[test]
    fn test_session_config_setters() {
        let config = SessionConfig::new(
            CompId::new("A").unwrap(),
            CompId::new("B").unwrap(),
            "FIX.4.2",
        )
        .with_validate_checksum(false)
        .with_strict_header(true)
        .with_lane_capacity(8);

        assert!(!config.validate_checksum);
        assert!(config.strict_header);
        assert_eq!(config.lane_capacity, 8);
    }
}
