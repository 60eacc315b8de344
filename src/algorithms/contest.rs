// Contest solver: event-driven orchestration of tour and partition DPs

use rayon::prelude::*;

use crate::algorithms::partition::best_partition;
use crate::algorithms::tour::TourPlanner;
use crate::error::SolverError;
use crate::models::{DayEvent, Position, Profit, Reward, SolverConfig};

/// Solves the incremental profit-maximization contest.
///
/// Input is the raw day format: row 0 carries the number of days, each
/// following row is one day's event (`[1, pos]` adds a collector,
/// `[2, pos, reward]` adds a depot). The solver replays the sequence and
/// reports, after each day, the best total profit achievable with every
/// collector and depot known so far, each collector touring its own disjoint
/// depot subset.
pub struct ContestSolver {
    config: SolverConfig,
}

impl ContestSolver {
    /// Creates a solver with the default configuration
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Creates a solver with an explicit configuration
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Runs the full event sequence, returning one optimum per declared day.
    ///
    /// Malformed rows are no-ops (the previous optimum is repeated), rows
    /// beyond the declared count are ignored, and out-of-range positions or
    /// rewards are taken as given. The only failure is a depot population
    /// exceeding the configured tractability bound.
    pub fn solve(&self, days: &[Vec<i64>]) -> Result<Vec<Profit>, SolverError> {
        if days.is_empty() {
            return Ok(Vec::new());
        }

        let declared = days[0].first().copied().unwrap_or(0);
        if declared <= 0 {
            return Ok(Vec::new());
        }
        let declared = declared as usize;

        let mut collectors: Vec<Position> = Vec::new();
        let mut depots: Vec<(Position, Reward)> = Vec::new();
        let mut results = Vec::with_capacity(declared);

        for day in 0..declared {
            match days.get(day + 1).and_then(|row| DayEvent::parse(row)) {
                Some(DayEvent::AddCollector { position }) => collectors.push(position),
                Some(DayEvent::AddDepot { position, reward }) => depots.push((position, reward)),
                None => {}
            }

            results.push(self.max_total_profit(&collectors, &depots)?);
        }

        Ok(results)
    }

    /// Best total profit for one collector/depot snapshot: every collector's
    /// tour profile over all depot subsets, then the partition optimum.
    pub fn max_total_profit(
        &self,
        collectors: &[Position],
        depots: &[(Position, Reward)],
    ) -> Result<Profit, SolverError> {
        if collectors.is_empty() || depots.is_empty() {
            return Ok(0);
        }

        let planner = TourPlanner::new(depots.to_vec(), &self.config)?;

        // Profiles are independent per collector; compute them in parallel
        let profiles: Vec<Vec<Profit>> = collectors
            .par_iter()
            .map(|&start| planner.profile(start))
            .collect();

        Ok(best_partition(
            &profiles,
            depots.len(),
            self.config.partition_strategy,
        ))
    }
}

impl Default for ContestSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let solver = ContestSolver::new();
        assert_eq!(solver.solve(&[]).unwrap(), Vec::<Profit>::new());
        assert_eq!(solver.solve(&[vec![]]).unwrap(), Vec::<Profit>::new());
        assert_eq!(solver.solve(&[vec![0]]).unwrap(), Vec::<Profit>::new());
    }

    #[test]
    fn test_single_collector_single_depot() {
        let solver = ContestSolver::new();
        let days = vec![vec![2], vec![1, 5], vec![2, 10, 20]];
        assert_eq!(solver.solve(&days).unwrap(), vec![0, 15]);
    }

    #[test]
    fn test_snapshot_profit_uses_linear_distance() {
        let solver = ContestSolver::new();
        let profit = solver.max_total_profit(&[5], &[(10, 20)]).unwrap();
        assert_eq!(profit, 15);
    }

    #[test]
    fn test_depot_population_bound() {
        let config = SolverConfig {
            max_tour_depots: 2,
            ..SolverConfig::default()
        };
        let solver = ContestSolver::with_config(config);
        let depots = vec![(1, 10), (2, 10), (3, 10)];
        assert_eq!(
            solver.max_total_profit(&[0], &depots),
            Err(SolverError::IntractableInput {
                depots: 3,
                limit: 2
            })
        );
    }
}
