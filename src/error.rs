use thiserror::Error;

/// Errors surfaced by the optimization engines.
///
/// Malformed domain data (odd positions, negative rewards, short event rows)
/// never produces an error; it is absorbed and shows up only through the
/// returned profit values. The engines fail hard only when an input is too
/// large for the exact exponential computations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    #[error("instance with {depots} depots exceeds the exact-solver limit of {limit}")]
    IntractableInput { depots: usize, limit: usize },
}
