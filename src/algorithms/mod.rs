pub mod assignment;
pub mod contest;
pub mod partition;
pub mod tour;

// Common profit interface
use crate::models::{CollectorKind, DepotKind, Profit, Reward};

/// Pluggable profit policy for collector/depot pairings.
///
/// Given the reward available at a depot and the distance a collector travels
/// to reach it, returns the net profit the collector realizes and the amount
/// removed from the depot. Callers with richer collector/depot behaviors
/// inject their own implementation; the engines only require this signature.
pub trait ProfitOracle {
    fn apply(
        &self,
        collector: CollectorKind,
        depot: DepotKind,
        reward: Reward,
        distance: u64,
    ) -> (Profit, Reward);
}

/// Default policy: profit is reward minus distance, clamped at zero, and the
/// full reward is removed from the depot.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOracle;

impl ProfitOracle for DefaultOracle {
    fn apply(
        &self,
        _collector: CollectorKind,
        _depot: DepotKind,
        reward: Reward,
        distance: u64,
    ) -> (Profit, Reward) {
        let cost = distance.min(i64::MAX as u64) as i64;
        (reward.saturating_sub(cost).max(0), reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_oracle_clamps_at_zero() {
        let oracle = DefaultOracle;
        let (profit, taken) =
            oracle.apply(CollectorKind::Standard, DepotKind::Standard, 10, 50);
        assert_eq!(profit, 0);
        assert_eq!(taken, 10);
    }

    #[test]
    fn test_default_oracle_profit() {
        let oracle = DefaultOracle;
        let (profit, taken) =
            oracle.apply(CollectorKind::Standard, DepotKind::Standard, 20, 5);
        assert_eq!(profit, 15);
        assert_eq!(taken, 20);
    }

    #[test]
    fn test_default_oracle_survives_extreme_distance() {
        let oracle = DefaultOracle;
        let (profit, _) =
            oracle.apply(CollectorKind::Standard, DepotKind::Standard, 10, u64::MAX);
        assert_eq!(profit, 0);
    }
}
