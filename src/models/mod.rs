// Models module - exports all model types

mod collector;
mod config;
mod depot;
mod event;

// Re-export model types
pub use self::collector::{Collector, CollectorKind};
pub use self::config::{DistanceMode, PartitionStrategy, SolverConfig};
pub use self::depot::{Depot, DepotKind};
pub use self::event::DayEvent;

// Common type aliases for improved code readability
pub type CollectorId = u32;
pub type DepotId = u32;
pub type Position = i64;
pub type Reward = i64;
pub type Profit = i64;

/// Set of depot indices encoded as bits, in depot insertion order.
pub type DepotMask = usize;
