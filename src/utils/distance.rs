// Distance calculation utilities

use crate::models::{DistanceMode, Position};

/// Distance between two route positions, ignoring any wrap-around
pub fn linear_distance(a: Position, b: Position) -> u64 {
    a.abs_diff(b)
}

/// Shortest distance between two route positions on a circular route.
/// The wrapped arm saturates at zero so out-of-range positions can never
/// produce a distance larger than the direct one going negative.
pub fn circular_distance(a: Position, b: Position, route_length: u64) -> u64 {
    let direct = a.abs_diff(b);
    let wrapped = route_length.saturating_sub(direct);
    direct.min(wrapped)
}

/// Distance between two route positions under the given mode
pub fn route_distance(a: Position, b: Position, route_length: u64, mode: DistanceMode) -> u64 {
    match mode {
        DistanceMode::Linear => linear_distance(a, b),
        DistanceMode::Circular => circular_distance(a, b, route_length),
    }
}
