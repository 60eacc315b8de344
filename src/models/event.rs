// Day event model for the contest input format

use crate::models::{Position, Reward};

/// A single day's event in a contest input sequence.
///
/// The raw format is one row of integers per day: `[1, position]` adds a
/// collector, `[2, position, reward]` adds a depot. Rows that do not match
/// either shape are treated as no-ops by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEvent {
    AddCollector { position: Position },
    AddDepot { position: Position, reward: Reward },
}

impl DayEvent {
    /// Parses a raw event row. Returns `None` for rows with an unknown kind
    /// or missing fields; values are taken as given, however out of range.
    pub fn parse(row: &[i64]) -> Option<DayEvent> {
        match row {
            [1, position, ..] => Some(DayEvent::AddCollector {
                position: *position,
            }),
            [2, position, reward, ..] => Some(DayEvent::AddDepot {
                position: *position,
                reward: *reward,
            }),
            _ => None,
        }
    }
}
