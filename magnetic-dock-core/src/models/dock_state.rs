use super::{DockPosition, Point};
use serde::{Deserialize, Serialize};

/// Whether the child is currently docked, and if so where.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq)]
pub enum DockState {
    #[default]
    Undocked,
    Docked {
        position: DockPosition,
        /// Host position minus child position, captured when docking.
        offset: Point,
    },
}

impl DockState {
    #[must_use]
    pub const fn is_docked(&self) -> bool {
        matches!(self, Self::Docked { .. })
    }

    #[must_use]
    pub const fn position(&self) -> Option<DockPosition> {
        match self {
            Self::Docked { position, .. } => Some(*position),
            Self::Undocked => None,
        }
    }

    #[must_use]
    pub const fn offset(&self) -> Option<Point> {
        match self {
            Self::Docked { offset, .. } => Some(*offset),
            Self::Undocked => None,
        }
    }
}
