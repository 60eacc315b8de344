// Profit matrix construction for the single-stop assignment engine

use crate::algorithms::ProfitOracle;
use crate::models::{Collector, Depot, Profit, SolverConfig};
use crate::utils::distance::route_distance;

/// Builds the collector x depot net-profit matrix for an assignment query.
/// Each entry is the oracle's realized profit for that pairing, clamped at
/// zero before insertion; distance uses the assignment-mode semantics.
pub fn build_profit_matrix(
    collectors: &[Collector],
    depots: &[Depot],
    config: &SolverConfig,
    oracle: &dyn ProfitOracle,
) -> Vec<Vec<Profit>> {
    collectors
        .iter()
        .map(|collector| {
            let from = collector.current_position();
            depots
                .iter()
                .map(|depot| {
                    let distance = route_distance(
                        from,
                        depot.position,
                        config.route_length,
                        config.assignment_distance,
                    );
                    let (profit, _) =
                        oracle.apply(collector.kind, depot.kind, depot.reward, distance);
                    profit.max(0)
                })
                .collect()
        })
        .collect()
}
