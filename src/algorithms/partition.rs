// Partition optimizer: splits the depot set across collectors' tours

use crate::models::{DepotMask, PartitionStrategy, Profit};

/// Sentinel for unreachable DP states
const UNREACHABLE: i64 = i64::MIN / 4;

/// A reconstructed partition: total profit plus the chosen
/// (collector index, depot subset) pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionOutcome {
    pub profit: Profit,
    pub assignments: Vec<(usize, DepotMask)>,
}

/// Best total profit from partitioning `depot_count` depots across the
/// collectors whose tour profiles are given (`profiles[r][mask]` = collector
/// `r`'s best profit over subset `mask`). Subsets may be empty and depots may
/// stay unassigned; the result is clamped at zero.
pub fn best_partition(
    profiles: &[Vec<Profit>],
    depot_count: usize,
    strategy: PartitionStrategy,
) -> Profit {
    if profiles.is_empty() || depot_count == 0 {
        return 0;
    }

    match strategy {
        PartitionStrategy::SharedProfiles => shared_partition_value(profiles, depot_count),
        PartitionStrategy::DistinctCollectors => distinct_partition_value(profiles, depot_count),
    }
}

/// Like [`best_partition`] but also reconstructs which collector takes which
/// depot subset. Under `SharedProfiles` the same collector can legitimately
/// appear in several pairs; that is the documented behavior of the strategy,
/// not a reconstruction bug.
pub fn best_partition_with_assignment(
    profiles: &[Vec<Profit>],
    depot_count: usize,
    strategy: PartitionStrategy,
) -> PartitionOutcome {
    if profiles.is_empty() || depot_count == 0 {
        return PartitionOutcome {
            profit: 0,
            assignments: Vec::new(),
        };
    }

    match strategy {
        PartitionStrategy::SharedProfiles => shared_partition_assignment(profiles, depot_count),
        PartitionStrategy::DistinctCollectors => {
            distinct_partition_assignment(profiles, depot_count)
        }
    }
}

/// `(mask, k)` DP: `dp[mask][k]` is the best profit covering exactly the
/// depots in `mask` with `k` tours, each tour scored as the best profile over
/// all collectors. Collectors already used in a branch are not excluded.
fn shared_partition_value(profiles: &[Vec<Profit>], depot_count: usize) -> Profit {
    let n = profiles.len();
    let full: DepotMask = (1 << depot_count) - 1;

    let mut dp = vec![vec![UNREACHABLE; n + 1]; full + 1];
    dp[0][0] = 0;

    for mask in 0..=full {
        for k in 0..n {
            if dp[mask][k] == UNREACHABLE {
                continue;
            }
            let unvisited = full ^ mask;
            if unvisited == 0 {
                continue;
            }

            let mut submask = unvisited;
            while submask > 0 {
                let best_for_submask = profiles
                    .iter()
                    .map(|profile| profile[submask])
                    .max()
                    .unwrap_or(0);
                let candidate = dp[mask][k].saturating_add(best_for_submask);

                let entry = &mut dp[mask | submask][k + 1];
                if candidate > *entry {
                    *entry = candidate;
                }

                submask = (submask - 1) & unvisited;
            }
        }
    }

    dp.iter()
        .flatten()
        .copied()
        .max()
        .unwrap_or(0)
        .max(0)
}

fn shared_partition_assignment(profiles: &[Vec<Profit>], depot_count: usize) -> PartitionOutcome {
    let n = profiles.len();
    let full: DepotMask = (1 << depot_count) - 1;

    let mut dp = vec![vec![UNREACHABLE; n + 1]; full + 1];
    // parent[mask][k] = (previous mask, submask taken, collector that took it)
    let mut parent: Vec<Vec<Option<(DepotMask, DepotMask, usize)>>> =
        vec![vec![None; n + 1]; full + 1];
    dp[0][0] = 0;

    for mask in 0..=full {
        for k in 0..n {
            if dp[mask][k] == UNREACHABLE {
                continue;
            }
            let unvisited = full ^ mask;
            if unvisited == 0 {
                continue;
            }

            let mut submask = unvisited;
            while submask > 0 {
                let (collector, best_for_submask) = profiles
                    .iter()
                    .enumerate()
                    .map(|(r, profile)| (r, profile[submask]))
                    .max_by_key(|&(_, profit)| profit)
                    .unwrap_or((0, 0));
                let candidate = dp[mask][k].saturating_add(best_for_submask);

                if candidate > dp[mask | submask][k + 1] {
                    dp[mask | submask][k + 1] = candidate;
                    parent[mask | submask][k + 1] = Some((mask, submask, collector));
                }

                submask = (submask - 1) & unvisited;
            }
        }
    }

    // Locate the best reachable state
    let mut best_profit = 0;
    let mut best_state: Option<(DepotMask, usize)> = None;
    for mask in 0..=full {
        for k in 0..=n {
            if dp[mask][k] > best_profit {
                best_profit = dp[mask][k];
                best_state = Some((mask, k));
            }
        }
    }

    // Backtrack, dropping tours that contribute nothing
    let mut assignments = Vec::new();
    if let Some((mut mask, mut k)) = best_state {
        while let Some((prev_mask, submask, collector)) = parent[mask][k] {
            if profiles[collector][submask] > 0 {
                assignments.push((collector, submask));
            }
            mask = prev_mask;
            k -= 1;
        }
        assignments.reverse();
    }

    PartitionOutcome {
        profit: best_profit,
        assignments,
    }
}

/// Exact sweep: one collector at a time, `dp[mask]` = best profit covering
/// exactly `mask` with the collectors processed so far. Each collector is
/// committed to at most one subset (possibly empty).
fn distinct_partition_value(profiles: &[Vec<Profit>], depot_count: usize) -> Profit {
    let full: DepotMask = (1 << depot_count) - 1;

    let mut dp = vec![UNREACHABLE; full + 1];
    dp[0] = 0;

    for profile in profiles {
        // Carrying dp forward unchanged covers the empty-subset choice
        let mut next = dp.clone();

        for mask in 0..=full {
            if dp[mask] == UNREACHABLE {
                continue;
            }
            let unvisited = full ^ mask;
            let mut submask = unvisited;
            while submask > 0 {
                let candidate = dp[mask].saturating_add(profile[submask]);
                let entry = &mut next[mask | submask];
                if candidate > *entry {
                    *entry = candidate;
                }
                submask = (submask - 1) & unvisited;
            }
        }

        dp = next;
    }

    dp.iter().copied().max().unwrap_or(0).max(0)
}

fn distinct_partition_assignment(profiles: &[Vec<Profit>], depot_count: usize) -> PartitionOutcome {
    let n = profiles.len();
    let full: DepotMask = (1 << depot_count) - 1;

    // layers[i][mask]: best profit over the first i collectors covering mask;
    // choices[i][mask]: the subset collector i took to reach that state
    let mut layers: Vec<Vec<Profit>> = Vec::with_capacity(n + 1);
    let mut choices: Vec<Vec<DepotMask>> = Vec::with_capacity(n);

    let mut base = vec![UNREACHABLE; full + 1];
    base[0] = 0;
    layers.push(base);

    for profile in profiles {
        let prev = layers.last().unwrap();
        let mut next = prev.clone();
        let mut choice = vec![0; full + 1];

        for mask in 0..=full {
            if prev[mask] == UNREACHABLE {
                continue;
            }
            let unvisited = full ^ mask;
            let mut submask = unvisited;
            while submask > 0 {
                let candidate = prev[mask].saturating_add(profile[submask]);
                if candidate > next[mask | submask] {
                    next[mask | submask] = candidate;
                    choice[mask | submask] = submask;
                }
                submask = (submask - 1) & unvisited;
            }
        }

        layers.push(next);
        choices.push(choice);
    }

    let last = layers.last().unwrap();
    let (mut mask, best_profit) = last
        .iter()
        .copied()
        .enumerate()
        .max_by_key(|&(_, profit)| profit)
        .unwrap_or((0, 0));

    let mut assignments = Vec::new();
    if best_profit > 0 {
        for i in (0..n).rev() {
            // The recorded choice is only valid if this layer actually
            // improved on carrying the previous layer forward
            let submask = if layers[i + 1][mask] == layers[i][mask] {
                0
            } else {
                choices[i][mask]
            };
            if submask != 0 && profiles[i][submask] > 0 {
                assignments.push((i, submask));
            }
            mask ^= submask;
        }
        assignments.reverse();
    }

    PartitionOutcome {
        profit: best_profit.max(0),
        assignments,
    }
}
