// Solver configuration shared by both optimization engines

use serde::{Deserialize, Serialize};

/// Distance semantics along the route.
///
/// The two engines historically differ: tour planning measures plain absolute
/// difference, while single-stop assignment treats the route as circular. Both
/// variants stay available so callers can reproduce either behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMode {
    /// `|a - b|`, route ends are not connected
    Linear,

    /// `min(|a - b|, route_length - |a - b|)`
    Circular,
}

/// Strategy for the depot partition step in tour mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionStrategy {
    /// Per submask, take the best profile over all collectors without
    /// excluding collectors already committed in the branch. Cheaper, and can
    /// overstate profit when collectors differ; kept as the default because it
    /// reproduces the established contest results.
    SharedProfiles,

    /// Track which collector takes each subset. Exact, `O(n * 3^m)`.
    DistinctCollectors,
}

/// Configuration for the optimization engines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Total length of the route, used by circular distance
    pub route_length: u64,

    /// Distance semantics for tour-mode profit calculation
    pub tour_distance: DistanceMode,

    /// Distance semantics for single-stop assignment
    pub assignment_distance: DistanceMode,

    /// Hard ceiling on depot count for the exponential tour/partition DPs
    pub max_tour_depots: usize,

    /// Largest side count still solved exactly by the assignment engine;
    /// instances with more collectors or more depots than this fall back to
    /// the greedy heuristic
    pub exact_assignment_limit: usize,

    /// Partition strategy for tour mode
    pub partition_strategy: PartitionStrategy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            route_length: 100,
            tour_distance: DistanceMode::Linear,
            assignment_distance: DistanceMode::Circular,
            max_tour_depots: 20,
            exact_assignment_limit: 10,
            partition_strategy: PartitionStrategy::SharedProfiles,
        }
    }
}

impl SolverConfig {
    /// Creates a configuration with the given route length and defaults
    /// for everything else
    pub fn with_route_length(route_length: u64) -> Self {
        Self {
            route_length,
            ..Self::default()
        }
    }
}
