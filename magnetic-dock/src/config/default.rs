use super::Config;
use magnetic_dock_core::config::DEFAULT_ADSORB_DISTANCE;
use magnetic_dock_core::{ConflictResolution, DockPosition};

impl Default for Config {
    fn default() -> Self {
        Self {
            positions: DockPosition::ALL.to_vec(),
            adsorb_distance: DEFAULT_ADSORB_DISTANCE,
            title_bar_height: 20.0,
            conflict_resolution: ConflictResolution::default(),
            log_level: "info".to_owned(),
        }
    }
}
