// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::assignment::{Assignment, AssignmentSolver};
pub use algorithms::contest::ContestSolver;
pub use algorithms::partition::{best_partition, best_partition_with_assignment};
pub use algorithms::tour::TourPlanner;
pub use algorithms::{DefaultOracle, ProfitOracle};
pub use error::SolverError;
pub use models::{Collector, Depot, SolverConfig};
