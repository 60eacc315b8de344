// Single-stop assignment solver: one depot per collector at most

use std::collections::{HashMap, HashSet};

use crate::algorithms::{DefaultOracle, ProfitOracle};
use crate::models::{Collector, Depot, Profit, SolverConfig};
use crate::utils::profit_matrix::build_profit_matrix;

/// A partial one-to-one pairing of collectors to depots
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    /// Collector index -> depot index
    pub pairs: HashMap<usize, usize>,

    /// Total net profit of the chosen pairs as reported by the solver
    pub total_profit: Profit,
}

impl Assignment {
    /// True when no collector was paired
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of paired collectors
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Depot assigned to a collector, if any
    pub fn depot_for(&self, collector: usize) -> Option<usize> {
        self.pairs.get(&collector).copied()
    }

    /// Recomputes the total profit of the pairing from a profit matrix.
    /// Matches `total_profit` for any assignment this solver produced.
    pub fn profit_against(&self, matrix: &[Vec<Profit>]) -> Profit {
        self.pairs
            .iter()
            .fold(0, |total: Profit, (&collector, &depot)| {
                total.saturating_add(matrix[collector][depot])
            })
    }
}

/// Maximum-weight one-to-one assignment between collectors and depots.
///
/// Small instances (both sides within the configured limit) are solved
/// exactly by exhaustive combination/permutation search; larger ones fall
/// back to a greedy heuristic that is not guaranteed optimal.
pub struct AssignmentSolver {
    config: SolverConfig,
}

impl AssignmentSolver {
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

    /// Assigns collectors to depots using the default profit policy
    /// (`max(0, reward - distance)`)
    pub fn assign(&self, collectors: &[Collector], depots: &[Depot]) -> Assignment {
        self.assign_with_oracle(collectors, depots, &DefaultOracle)
    }

    /// Assigns collectors to depots under an injected profit policy
    pub fn assign_with_oracle(
        &self,
        collectors: &[Collector],
        depots: &[Depot],
        oracle: &dyn ProfitOracle,
    ) -> Assignment {
        if collectors.is_empty() || depots.is_empty() {
            return Assignment::default();
        }

        let matrix = build_profit_matrix(collectors, depots, &self.config, oracle);
        self.assign_matrix(&matrix)
    }

    /// Assigns directly from a prebuilt profit matrix
    pub fn assign_matrix(&self, matrix: &[Vec<Profit>]) -> Assignment {
        if matrix.is_empty() || matrix[0].is_empty() {
            return Assignment::default();
        }

        let collectors = matrix.len();
        let depots = matrix[0].len();

        // Both sides must be within the limit: the exhaustive search
        // enumerates combinations of the larger side, so a lopsided
        // instance is just as intractable as a square one
        if collectors.max(depots) <= self.config.exact_assignment_limit {
            self.exact_assignment(matrix)
        } else {
            self.greedy_assignment(matrix)
        }
    }

    /// Exhaustive search over the smaller side's combinations
    pub fn exact_assignment(&self, matrix: &[Vec<Profit>]) -> Assignment {
        let collectors = matrix.len();
        let depots = matrix[0].len();

        if depots >= collectors {
            exact_over_depots(matrix, collectors, depots)
        } else {
            exact_over_collectors(matrix, collectors, depots)
        }
    }

    /// Greedy approximation: highest-profit free pair first, strictly
    /// positive profits only
    pub fn greedy_assignment(&self, matrix: &[Vec<Profit>]) -> Assignment {
        let collectors = matrix.len();
        let depots = matrix[0].len();

        let mut candidates: Vec<(Profit, usize, usize)> = Vec::with_capacity(collectors * depots);
        for (c, row) in matrix.iter().enumerate() {
            for (d, &profit) in row.iter().enumerate() {
                candidates.push((profit, c, d));
            }
        }

        // Descending profit; index order breaks ties deterministically
        candidates.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

        let mut used_collectors = HashSet::new();
        let mut used_depots = HashSet::new();
        let mut pairs = HashMap::new();
        let mut total_profit: Profit = 0;

        for (profit, c, d) in candidates {
            if profit <= 0 {
                break;
            }
            if used_collectors.contains(&c) || used_depots.contains(&d) {
                continue;
            }

            pairs.insert(c, d);
            used_collectors.insert(c);
            used_depots.insert(d);
            total_profit = total_profit.saturating_add(profit);

            if used_collectors.len() == collectors || used_depots.len() == depots {
                break;
            }
        }

        Assignment {
            pairs,
            total_profit,
        }
    }
}

impl Default for AssignmentSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// More depots than collectors: try every depot combination of collector-count
/// size, in every order, pairing collector `i` with the `i`-th depot
fn exact_over_depots(matrix: &[Vec<Profit>], collectors: usize, depots: usize) -> Assignment {
    let mut best = Assignment::default();

    for subset in combinations(depots, collectors) {
        for perm in permutations(subset.clone()) {
            let mut profit: Profit = 0;
            for (c, &d) in perm.iter().enumerate() {
                profit = profit.saturating_add(matrix[c][d]);
            }

            if profit > best.total_profit {
                best.total_profit = profit;
                best.pairs = perm
                    .iter()
                    .enumerate()
                    .filter(|&(c, &d)| matrix[c][d] > 0)
                    .map(|(c, &d)| (c, d))
                    .collect();
            }
        }
    }

    best
}

/// More collectors than depots: try every collector combination of depot-count
/// size against every depot ordering
fn exact_over_collectors(matrix: &[Vec<Profit>], collectors: usize, depots: usize) -> Assignment {
    let mut best = Assignment::default();
    let all_depots: Vec<usize> = (0..depots).collect();

    for subset in combinations(collectors, depots) {
        for perm in permutations(all_depots.clone()) {
            let mut profit: Profit = 0;
            for (i, &d) in perm.iter().enumerate() {
                profit = profit.saturating_add(matrix[subset[i]][d]);
            }

            if profit > best.total_profit {
                best.total_profit = profit;
                best.pairs = perm
                    .iter()
                    .enumerate()
                    .filter(|&(i, &d)| matrix[subset[i]][d] > 0)
                    .map(|(i, &d)| (subset[i], d))
                    .collect();
            }
        }
    }

    best
}

/// All k-element index combinations of `0..n`, by backtracking
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    let mut current = Vec::with_capacity(k);
    combinations_helper(n, k, 0, &mut current, &mut result);
    result
}

fn combinations_helper(
    n: usize,
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    result: &mut Vec<Vec<usize>>,
) {
    if current.len() == k {
        result.push(current.clone());
        return;
    }

    for i in start..n {
        current.push(i);
        combinations_helper(n, k, i + 1, current, result);
        current.pop();
    }
}

/// All permutations of the given indices
fn permutations(items: Vec<usize>) -> Vec<Vec<usize>> {
    if items.is_empty() {
        return vec![vec![]];
    }

    let mut result = Vec::new();

    for (i, &item) in items.iter().enumerate() {
        let mut remaining = items.clone();
        remaining.remove(i);

        for mut perm in permutations(remaining) {
            perm.insert(0, item);
            result.push(perm);
        }
    }

    result
}
