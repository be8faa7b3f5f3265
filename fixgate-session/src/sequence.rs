/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/26
******************************************************************************/

//! Sequence number tracking for a session.

use fixgate_core::types::SeqNum;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Result of checking an inbound sequence number against the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqCheck {
    /// The sequence number matches the expected value.
    InOrder,
    /// The sequence number is ahead of the expected value (messages skipped).
    Gap {
        /// The sequence number that was expected.
        expected: u64,
    },
    /// The sequence number is behind the expected value (possible duplicate).
    TooLow {
        /// The sequence number that was expected.
        expected: u64,
    },
}

impl SeqCheck {
    /// Returns true if the sequence number arrived in order.
    #[must_use]
    pub const fn is_in_order(self) -> bool {
        matches!(self, Self::InOrder)
    }
}

/// Tracks inbound and outbound sequence numbers for one session.
///
/// Outbound numbers are allocated atomically so concurrent callers never
/// receive the same number. Inbound observation records gaps without
/// attempting recovery.
#[derive(Debug)]
pub struct SequenceTracker {
    next_inbound: AtomicU64,
    next_outbound: AtomicU64,
}

impl SequenceTracker {
    /// Creates a tracker with both sides starting at sequence 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_inbound: AtomicU64::new(1),
            next_outbound: AtomicU64::new(1),
        }
    }

    /// Allocates the next outbound sequence number.
    pub fn allocate_outbound(&self) -> SeqNum {
        SeqNum::new(self.next_outbound.fetch_add(1, Ordering::SeqCst))
    }

    /// Returns the next outbound sequence number without allocating it.
    #[must_use]
    pub fn peek_outbound(&self) -> u64 {
        self.next_outbound.load(Ordering::SeqCst)
    }

    /// Returns the next expected inbound sequence number.
    #[must_use]
    pub fn expected_inbound(&self) -> u64 {
        self.next_inbound.load(Ordering::SeqCst)
    }

    /// Observes an inbound sequence number and classifies it.
    ///
    /// After a gap the expectation jumps forward to `seq_num + 1` so that
    /// processing continues from the observed point.
    pub fn observe_inbound(&self, seq_num: u64) -> SeqCheck {
        let expected = self.next_inbound.load(Ordering::SeqCst);
        if seq_num == expected {
            self.next_inbound.store(seq_num + 1, Ordering::SeqCst);
            SeqCheck::InOrder
        } else if seq_num > expected {
            warn!(
                expected,
                received = seq_num,
                "inbound sequence gap detected"
            );
            self.next_inbound.store(seq_num + 1, Ordering::SeqCst);
            SeqCheck::Gap { expected }
        } else {
            warn!(
                expected,
                received = seq_num,
                "inbound sequence number too low"
            );
            SeqCheck::TooLow { expected }
        }
    }

    /// Resets both sides to sequence 1.
    pub fn reset(&self) {
        self.next_inbound.store(1, Ordering::SeqCst);
        self.next_outbound.store(1, Ordering::SeqCst);
    }
}

impl Default for SequenceTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_outbound_increments() {
        let tracker = SequenceTracker::new();
        assert_eq!(tracker.allocate_outbound().value(), 1);
        assert_eq!(tracker.allocate_outbound().value(), 2);
        assert_eq!(tracker.peek_outbound(), 3);
    }

    #[test]
    fn test_observe_in_order() {
        let tracker = SequenceTracker::new();
        assert_eq!(tracker.observe_inbound(1), SeqCheck::InOrder);
        assert_eq!(tracker.observe_inbound(2), SeqCheck::InOrder);
        assert_eq!(tracker.expected_inbound(), 3);
    }

    #[test]
    fn test_observe_gap_advances_expectation() {
        let tracker = SequenceTracker::new();
        assert_eq!(tracker.observe_inbound(1), SeqCheck::InOrder);
        assert_eq!(tracker.observe_inbound(5), SeqCheck::Gap { expected: 2 });
        assert_eq!(tracker.observe_inbound(6), SeqCheck::InOrder);
    }

    #[test]
    fn test_observe_too_low_does_not_advance() {
        let tracker = SequenceTracker::new();
        assert_eq!(tracker.observe_inbound(1), SeqCheck::InOrder);
        assert_eq!(tracker.observe_inbound(1), SeqCheck::TooLow { expected: 2 });
        assert_eq!(tracker.expected_inbound(), 2);
    }

    #[test]
    fn test_reset() {
        let tracker = SequenceTracker::new();
        tracker.allocate_outbound();
        tracker.observe_inbound(1);
        tracker.reset();
        assert_eq!(tracker.peek_outbound(), 1);
        assert_eq!(tracker.expected_inbound(), 1);
    }
}
