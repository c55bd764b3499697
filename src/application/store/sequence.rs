// SPDX-License-Identifier: MPL-2.0
//! Monotonic request sequencing.
//!
//! Every fetch is tagged with a [`RequestSeq`] taken from a [`RequestSequence`].
//! When a response arrives, only the most recently issued sequence number is
//! applied; anything older is a stale response. This turns "last response
//! wins" into "last request wins".

use std::fmt;

/// Sequence number attached to one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues strictly increasing sequence numbers and remembers the latest one.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next sequence number; it becomes the only current one.
    pub fn issue(&mut self) -> RequestSeq {
        self.latest += 1;
        RequestSeq(self.latest)
    }

    /// Returns the most recently issued sequence number, if any.
    #[must_use]
    pub fn latest(&self) -> Option<RequestSeq> {
        (self.latest > 0).then_some(RequestSeq(self.latest))
    }

    /// Returns `true` if `seq` is the most recently issued number.
    #[must_use]
    pub fn is_current(&self, seq: RequestSeq) -> bool {
        seq.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sequence_has_no_latest() {
        let sequence = RequestSequence::new();
        assert_eq!(sequence.latest(), None);
    }

    #[test]
    fn issued_numbers_strictly_increase() {
        let mut sequence = RequestSequence::new();
        let first = sequence.issue();
        let second = sequence.issue();
        assert!(second > first);
        assert_eq!(sequence.latest(), Some(second));
    }

    #[test]
    fn only_latest_issue_is_current() {
        let mut sequence = RequestSequence::new();
        let first = sequence.issue();
        assert!(sequence.is_current(first));
        let second = sequence.issue();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }
}
