//! Transition direction and the slide edges a renderer derives from it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of the most recently requested page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Towards higher page indices (the "next" control).
    #[default]
    Forward,
    /// Towards lower page indices (the "previous" control).
    Backward,
}

/// Horizontal edge of the carousel viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Edge the incoming page slides in from.
    pub fn enter_edge(self) -> Edge {
        match self {
            Direction::Forward => Edge::Right,
            Direction::Backward => Edge::Left,
        }
    }

    /// Edge the outgoing page slides out through.
    pub fn exit_edge(self) -> Edge {
        self.reversed().enter_edge()
    }
}
