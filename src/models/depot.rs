// Depot model representing fixed reward sources on the route

use crate::models::{DepotId, Position, Reward};

/// Behavior tag for a depot, passed through to the profit oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepotKind {
    /// Any collector may harvest
    #[default]
    Standard,

    /// Refuses collectors below a caller-defined threshold
    Guarded,
}

/// Represents a depot holding a reward at a fixed route position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Depot {
    /// Unique identifier for the depot
    pub id: DepotId,

    /// Behavior tag consumed by the profit oracle
    pub kind: DepotKind,

    /// Position of the depot on the route
    pub position: Position,

    /// Reward currently available at the depot
    pub reward: Reward,
}

impl Depot {
    /// Creates a standard depot with the given position and reward
    pub fn new(id: DepotId, position: Position, reward: Reward) -> Self {
        Self {
            id,
            kind: DepotKind::Standard,
            position,
            reward,
        }
    }

    /// Creates a depot with an explicit kind
    pub fn new_with_kind(id: DepotId, position: Position, reward: Reward, kind: DepotKind) -> Self {
        Self {
            id,
            kind,
            position,
            reward,
        }
    }

    /// Removes up to `amount` from the depot's reward.
    /// Returns the amount actually removed.
    pub fn collect(&mut self, amount: Reward) -> Reward {
        let taken = amount.clamp(0, self.reward.max(0));
        self.reward -= taken;
        taken
    }

    /// Adds reward back to the depot
    pub fn restock(&mut self, amount: Reward) {
        if amount > 0 {
            self.reward = self.reward.saturating_add(amount);
        }
    }

    /// Checks whether anything is left to harvest
    pub fn is_empty(&self) -> bool {
        self.reward <= 0
    }
}
