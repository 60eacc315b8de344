// Collector model representing mobile agents on the route

use crate::models::{CollectorId, Position};

/// Behavior tag for a collector. The optimization core never interprets
/// these beyond passing them to the active profit oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectorKind {
    /// Keeps the full reward minus travel cost
    #[default]
    Standard,

    /// Keeps only part of the reward (policy defined by the caller's oracle)
    Tender,

    /// Never harvests anything
    Idle,
}

/// Represents a collector with a fixed starting position on the route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collector {
    /// Unique identifier for the collector
    pub id: CollectorId,

    /// Behavior tag consumed by the profit oracle
    pub kind: CollectorKind,

    /// Position the collector starts every tour from
    pub initial_position: Position,

    /// Current position, tracked only by single-stop callers
    pub position: Option<Position>,
}

impl Collector {
    /// Creates a standard collector at the given position
    pub fn new(id: CollectorId, initial_position: Position) -> Self {
        Self {
            id,
            kind: CollectorKind::Standard,
            initial_position,
            position: None,
        }
    }

    /// Creates a collector with an explicit kind
    pub fn new_with_kind(id: CollectorId, initial_position: Position, kind: CollectorKind) -> Self {
        Self {
            id,
            kind,
            initial_position,
            position: None,
        }
    }

    /// Position the next trip starts from: the tracked current position if the
    /// caller maintains one, otherwise the initial position
    pub fn current_position(&self) -> Position {
        self.position.unwrap_or(self.initial_position)
    }

    /// Records a new current position
    pub fn move_to(&mut self, position: Position) {
        self.position = Some(position);
    }

    /// Forgets the tracked position, returning the collector to its start
    pub fn return_to_start(&mut self) {
        self.position = None;
    }
}
