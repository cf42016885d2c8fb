mod conflict_resolution;

use crate::models::DockPositionSet;
pub use conflict_resolution::ConflictResolution;

/// Snap distance used when the configuration does not override it.
pub const DEFAULT_ADSORB_DISTANCE: f64 = 30.0;

pub trait Config {
    /// Positions the child is allowed to dock to.
    fn dock_positions(&self) -> DockPositionSet;

    /// Edges closer than this (strictly) attract the child.
    fn adsorb_distance(&self) -> f64 {
        DEFAULT_ADSORB_DISTANCE
    }

    /// Height of a native title bar, added above the client area of
    /// decorated windows.
    fn title_bar_height(&self) -> f64;

    fn conflict_resolution(&self) -> ConflictResolution {
        ConflictResolution::default()
    }
}
