//! The staff-entered pending order.

use serde::Deserialize;
use serde::Serialize;

/// Counts being composed on screen before submission.
///
/// Values may transiently go below zero while staff tap the minus
/// affordance; a negative pending order is flagged inline by the screen
/// and never reaches the backend. After a mutation settles the whole
/// value is reset to [`OrderCounts::ZERO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderCounts {
    pub curry: i64,
    pub nan: i64,
}

impl OrderCounts {
    pub const ZERO: Self = Self { curry: 0, nan: 0 };

    /// True when both counters are zero, i.e. there is nothing to submit.
    pub fn is_zero(&self) -> bool {
        self.curry == 0 && self.nan == 0
    }

    /// True when either counter went below zero.
    pub fn has_negative(&self) -> bool {
        self.curry < 0 || self.nan < 0
    }

    pub fn with_curry(self, curry: i64) -> Self {
        Self { curry, ..self }
    }

    pub fn with_nan(self, nan: i64) -> Self {
        Self { nan, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_then_decrement_is_identity() {
        for start in [-2i64, 0, 1, 41] {
            let counts = OrderCounts { curry: start, nan: 9 };
            let bumped = counts.with_curry(counts.curry + 1);
            let reverted = bumped.with_curry(bumped.curry - 1);
            assert_eq!(reverted, counts);
        }
    }

    #[test]
    fn zero_and_negative_predicates() {
        assert!(OrderCounts::ZERO.is_zero());
        assert!(!OrderCounts { curry: 3, nan: 0 }.is_zero());
        assert!(!OrderCounts { curry: 0, nan: 1 }.is_zero());

        assert!(!OrderCounts::ZERO.has_negative());
        assert!(OrderCounts { curry: -1, nan: 0 }.has_negative());
        assert!(OrderCounts { curry: 2, nan: -3 }.has_negative());
    }
}
