// Tour profit calculator: open-path DP over depot-subset bitmasks

use crate::error::SolverError;
use crate::models::{DepotMask, DistanceMode, Position, Profit, Reward, SolverConfig};
use crate::utils::distance::route_distance;

/// Sentinel for unreachable DP states, far enough from `i64::MIN` that
/// saturating additions cannot creep back into the valid range.
const UNREACHABLE: i64 = i64::MIN / 4;

/// Net profit of a single hop: reward at the destination minus distance
fn hop_profit(reward: Reward, distance: u64) -> Profit {
    let cost = distance.min(i64::MAX as u64) as i64;
    reward.saturating_sub(cost)
}

/// Computes, for one collector start position, the best net profit obtainable
/// by visiting any ordered subset of a depot snapshot in one open path.
///
/// The planner holds an immutable snapshot of `(position, reward)` pairs;
/// depot indices and subset masks refer to that snapshot in insertion order.
/// Time is `O(2^m * m^2)` and space `O(2^m * m)`, so construction rejects
/// snapshots larger than the configured depot ceiling.
pub struct TourPlanner {
    depots: Vec<(Position, Reward)>,
    route_length: u64,
    distance_mode: DistanceMode,
}

impl TourPlanner {
    /// Creates a planner over a depot snapshot.
    /// Fails if the snapshot exceeds the configured tractability bound.
    pub fn new(
        depots: Vec<(Position, Reward)>,
        config: &SolverConfig,
    ) -> Result<Self, SolverError> {
        if depots.len() > config.max_tour_depots {
            return Err(SolverError::IntractableInput {
                depots: depots.len(),
                limit: config.max_tour_depots,
            });
        }

        Ok(Self {
            depots,
            route_length: config.route_length,
            distance_mode: config.tour_distance,
        })
    }

    /// Number of depots in the snapshot
    pub fn depot_count(&self) -> usize {
        self.depots.len()
    }

    /// Mask covering every depot in the snapshot
    pub fn full_mask(&self) -> DepotMask {
        (1usize << self.depots.len()) - 1
    }

    fn distance(&self, a: Position, b: Position) -> u64 {
        route_distance(a, b, self.route_length, self.distance_mode)
    }

    /// Best net profit for visiting exactly the depots in `subset`, in the
    /// best order, starting from `start`. Visiting nothing is worth 0, so the
    /// result is clamped at zero.
    pub fn best_tour_profit(&self, start: Position, subset: DepotMask) -> Profit {
        let indices: Vec<usize> = (0..self.depots.len())
            .filter(|i| subset & (1 << i) != 0)
            .collect();
        let n = indices.len();

        if n == 0 {
            return 0;
        }

        if n == 1 {
            let (pos, reward) = self.depots[indices[0]];
            return hop_profit(reward, self.distance(start, pos)).max(0);
        }

        // dp[mask][last]: best profit having visited exactly `mask`
        // (subset-local indices), ending at depot `last`
        let mut dp = vec![vec![UNREACHABLE; n]; 1 << n];
        for (i, &idx) in indices.iter().enumerate() {
            let (pos, reward) = self.depots[idx];
            dp[1 << i][i] = hop_profit(reward, self.distance(start, pos));
        }

        for mask in 1usize..(1 << n) {
            for last in 0..n {
                if mask & (1 << last) == 0 || dp[mask][last] == UNREACHABLE {
                    continue;
                }
                let (last_pos, _) = self.depots[indices[last]];

                for next in 0..n {
                    if mask & (1 << next) != 0 {
                        continue;
                    }
                    let (next_pos, next_reward) = self.depots[indices[next]];
                    let gain = hop_profit(next_reward, self.distance(last_pos, next_pos));
                    let candidate = dp[mask][last].saturating_add(gain);

                    let entry = &mut dp[mask | (1 << next)][next];
                    if candidate > *entry {
                        *entry = candidate;
                    }
                }
            }
        }

        let mut best = 0;
        for mask in 1usize..(1 << n) {
            for last in 0..n {
                if dp[mask][last] > best {
                    best = dp[mask][last];
                }
            }
        }
        best
    }

    /// Best tour profit for every depot subset at once, indexed by mask.
    /// One global DP pass; entry `mask` equals `best_tour_profit(start, mask)`.
    pub fn profile(&self, start: Position) -> Vec<Profit> {
        let m = self.depots.len();
        if m == 0 {
            return vec![0];
        }

        let size = 1usize << m;
        let mut dp = vec![vec![UNREACHABLE; m]; size];
        for (i, &(pos, reward)) in self.depots.iter().enumerate() {
            dp[1 << i][i] = hop_profit(reward, self.distance(start, pos));
        }

        for mask in 1usize..size {
            for last in 0..m {
                if mask & (1 << last) == 0 || dp[mask][last] == UNREACHABLE {
                    continue;
                }
                let (last_pos, _) = self.depots[last];

                for next in 0..m {
                    if mask & (1 << next) != 0 {
                        continue;
                    }
                    let (next_pos, next_reward) = self.depots[next];
                    let gain = hop_profit(next_reward, self.distance(last_pos, next_pos));
                    let candidate = dp[mask][last].saturating_add(gain);

                    let entry = &mut dp[mask | (1 << next)][next];
                    if candidate > *entry {
                        *entry = candidate;
                    }
                }
            }
        }

        let mut profile = vec![0; size];
        for mask in 1usize..size {
            let best = dp[mask].iter().copied().max().unwrap_or(UNREACHABLE);
            profile[mask] = best.max(0);
        }
        profile
    }
}
