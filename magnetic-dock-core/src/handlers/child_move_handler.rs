use crate::config::Config;
use crate::controller::DockController;
use crate::display_servers::DisplayServer;
use crate::models::{Axis, DockState, Handle, Point};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> DockController<H, C, SERVER> {
    /// The user dragged the child so that its top-left corner is at (x, y).
    ///
    /// Snaps the child to every enabled host edge within reach, records the
    /// resulting dock state and moves the child to its final position.
    /// Returns false if the controller is detached or a window is gone.
    pub fn child_move_handler(&mut self, x: f64, y: f64) -> bool {
        if !self.attached {
            return false;
        }
        let Some((host, child)) = self.effective_geometry() else {
            tracing::warn!(host = ?self.host, child = ?self.child, "Cannot dock a missing window");
            return false;
        };
        let child = child.moved_to(Point::new(x, y));
        let distance = self.config.adsorb_distance();
        let resolution = self.config.conflict_resolution();

        let matches: Vec<_> = self
            .positions
            .positions()
            .filter(|position| position.attracts(&host, &child, distance))
            .collect();
        let on_axis = |axis: Axis| {
            let candidates = matches.iter().copied().filter(move |p| p.axis() == axis);
            resolution.pick(candidates, &host, &child)
        };
        let horizontal = on_axis(Axis::Horizontal);
        let vertical = on_axis(Axis::Vertical);

        let mut target = child.position();
        if let Some(position) = horizontal {
            target.x = position.snapped_coordinate(&host, &child);
        }
        if let Some(position) = vertical {
            target.y = position.snapped_coordinate(&host, &child);
        }

        let previous = self.state.position();
        self.state = match vertical.or(horizontal) {
            Some(position) => DockState::Docked {
                position,
                offset: host.position() - target,
            },
            None => DockState::Undocked,
        };
        if previous != self.state.position() {
            match self.state.position() {
                Some(position) => tracing::debug!(%position, "Child docked"),
                None => tracing::debug!("Child undocked"),
            }
        }

        self.move_child(target);
        true
    }
}
