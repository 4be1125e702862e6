use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical clock value supplied by the host environment.
///
/// The host (a ledger runtime) threads the current height into every
/// operation as a fixed input; the core never samples time itself. Heights
/// are monotonically non-decreasing across operations, but that is the
/// host's obligation — the core only compares them.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BlockHeight(pub u64);

impl BlockHeight {
    /// Create a height with an explicit value.
    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    /// The genesis height.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw height value.
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The next height. Saturates at `u64::MAX`.
    pub const fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<u64> for BlockHeight {
    fn from(height: u64) -> Self {
        Self(height)
    }
}

impl fmt::Debug for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHeight({})", self.0)
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_value() {
        assert!(BlockHeight::new(1) < BlockHeight::new(2));
        assert!(BlockHeight::zero() < BlockHeight::new(1));
        assert_eq!(BlockHeight::new(5), BlockHeight::from(5));
    }

    #[test]
    fn next_advances_by_one() {
        assert_eq!(BlockHeight::new(99).next(), BlockHeight::new(100));
    }

    #[test]
    fn next_saturates_at_max() {
        assert_eq!(
            BlockHeight::new(u64::MAX).next(),
            BlockHeight::new(u64::MAX)
        );
    }

    #[test]
    fn display_format() {
        assert_eq!(format!("{}", BlockHeight::new(42)), "#42");
    }

    #[test]
    fn serde_roundtrip() {
        let height = BlockHeight::new(1234);
        let json = serde_json::to_string(&height).unwrap();
        let parsed: BlockHeight = serde_json::from_str(&json).unwrap();
        assert_eq!(height, parsed);
    }
}
