//! Greedy heuristic configuration.

/// Acceptance test applied while filling the knapsack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillRule {
    /// Accept while `packed + weight < capacity`.
    ///
    /// An item that would fill the remaining capacity exactly is skipped,
    /// and nothing is ever packed into a zero capacity.
    #[default]
    StrictBelow,

    /// Accept while `packed + weight <= capacity`.
    UpToCapacity,
}

impl FillRule {
    pub fn accepts(self, packed: u64, weight: u64, capacity: u64) -> bool {
        match packed.checked_add(weight) {
            None => false,
            Some(total) => match self {
                FillRule::StrictBelow => total < capacity,
                FillRule::UpToCapacity => total <= capacity,
            },
        }
    }
}

/// Configuration for [`GreedySolver`](super::GreedySolver).
///
/// # Examples
///
/// ```
/// use u_knapsack::greedy::{FillRule, GreedyConfig};
///
/// let config = GreedyConfig::default()
///     .with_fill_rule(FillRule::UpToCapacity)
///     .with_best_single_item(true);
/// assert_eq!(config.fill_rule, FillRule::UpToCapacity);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Acceptance test while filling.
    pub fill_rule: FillRule,

    /// Compare the greedy fill against the best single item that fits and
    /// keep the better one (extended greedy).
    ///
    /// With [`FillRule::UpToCapacity`] this guarantees half the optimum.
    pub best_single_item: bool,
}

impl GreedyConfig {
    pub fn with_fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }

    pub fn with_best_single_item(mut self, enabled: bool) -> Self {
        self.best_single_item = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_rejects_exact_fit() {
        assert!(!FillRule::StrictBelow.accepts(3, 4, 7));
        assert!(FillRule::StrictBelow.accepts(3, 3, 7));
        assert!(!FillRule::StrictBelow.accepts(0, 0, 0));
    }

    #[test]
    fn test_inclusive_accepts_exact_fit() {
        assert!(FillRule::UpToCapacity.accepts(3, 4, 7));
        assert!(!FillRule::UpToCapacity.accepts(3, 5, 7));
        assert!(FillRule::UpToCapacity.accepts(0, 0, 0));
    }

    #[test]
    fn test_overflow_never_accepted() {
        assert!(!FillRule::UpToCapacity.accepts(u64::MAX, 1, u64::MAX));
    }
}
