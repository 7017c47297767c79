use std::fmt;

/// Sequence number attached to an in-flight backend request.
///
/// Numbers are issued by `SessionState` in strictly increasing order, so a
/// larger value always belongs to a newer request.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestSeq(u64);

impl RequestSeq {
    /// Creates a new `RequestSeq`
    #[must_use]
    pub fn new(seq: u64) -> Self {
        Self(seq)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the sequence number that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Debug for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestSeq({})", self.0)
    }
}

impl fmt::Display for RequestSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
