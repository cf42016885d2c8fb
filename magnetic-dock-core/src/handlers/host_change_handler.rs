use crate::DisplayEvent;
use crate::config::Config;
use crate::controller::DockController;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::models::{DockState, Handle};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> DockController<H, C, SERVER> {
    /// React to a move, resize or destroy notification from the host.
    ///
    /// Returns true if the child was moved or closed. Notifications from
    /// any other window are left unhandled.
    pub fn host_change_handler(&mut self, event: &DisplayEvent<H>) -> bool {
        if !self.attached || event.source() != &self.host {
            return false;
        }
        match event {
            DisplayEvent::HostDestroyed(_) => self.host_destroyed_handler(),
            DisplayEvent::HostMoved(_) => self.host_moved_handler(),
            DisplayEvent::HostResized(_) => self.host_resized_handler(),
            DisplayEvent::ChildMoved(..) | DisplayEvent::ChildClosed(_) => false,
        }
    }

    // The host is gone, so there is nothing left to unwatch.
    fn host_destroyed_handler(&mut self) -> bool {
        tracing::debug!(host = ?self.host, child = ?self.child, "Host destroyed, closing child");
        self.detach();
        self.display_server
            .execute_action(DisplayAction::CloseWindow(self.child));
        true
    }

    fn host_moved_handler(&mut self) -> bool {
        let DockState::Docked { offset, .. } = self.state else {
            return false;
        };
        let Some((host, _)) = self.effective_geometry() else {
            return false;
        };
        self.move_child(host.position() - offset);
        true
    }

    fn host_resized_handler(&mut self) -> bool {
        let DockState::Docked { position, offset } = self.state else {
            return false;
        };
        let Some((host, child)) = self.effective_geometry() else {
            return false;
        };
        self.move_child(position.follow_resize(&host, &child, offset));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::{CHILD, HOST, TestController};
    use crate::DisplayEvent;
    use crate::config::tests::TestConfig;
    use crate::display_action::DisplayAction;
    use crate::models::{DockPosition, DockPositionSet, Point, WindowFrame, WindowHandle, Xyhw};

    fn frameless(x: f64, y: f64, w: f64, h: f64) -> WindowFrame {
        WindowFrame::frameless(Xyhw::new(x, y, w, h))
    }

    fn moves(controller: &TestController) -> usize {
        controller
            .display_server
            .actions()
            .iter()
            .filter(|a| matches!(a, DisplayAction::MoveWindow(..)))
            .count()
    }

    fn docked_controller(position: DockPosition, drag_to: (f64, f64)) -> TestController {
        let mut controller = TestController::new_test(
            TestConfig {
                positions: position.into(),
                ..TestConfig::default()
            },
            frameless(100.0, 100.0, 400.0, 300.0),
            frameless(1000.0, 1000.0, 100.0, 50.0),
        );
        controller.child_move_handler(drag_to.0, drag_to.1);
        assert_eq!(controller.active_position(), Some(position));
        controller
    }

    #[test]
    fn docked_child_should_follow_the_host() {
        let mut controller = docked_controller(DockPosition::OutsideRight, (510.0, 150.0));
        assert_eq!(controller.child_position(), Point::new(500.0, 150.0));

        controller.display_server.move_window_by(HOST, 37.0, -12.5);
        assert!(controller.handle_events());
        assert_eq!(controller.child_position(), Point::new(537.0, 137.5));
    }

    #[test]
    fn follow_ignores_the_dock_position() {
        let mut controller = docked_controller(DockPosition::InsideBottom, (200.0, 340.0));
        let before = controller.child_position();
        controller.display_server.move_window_by(HOST, -40.0, 25.0);
        controller.handle_events();
        assert_eq!(
            controller.child_position(),
            before + Point::new(-40.0, 25.0)
        );
    }

    #[test]
    fn undocked_child_should_stay_put_when_the_host_moves() {
        let mut controller = TestController::new_test(
            TestConfig::default(),
            frameless(100.0, 100.0, 400.0, 300.0),
            frameless(1000.0, 1000.0, 100.0, 50.0),
        );
        controller.display_server.move_window_by(HOST, 10.0, 10.0);
        controller.display_server.resize_window(HOST, 500.0, 400.0);
        assert!(!controller.handle_events());
        assert_eq!(moves(&controller), 0);
    }

    #[test]
    fn undocking_should_stop_following() {
        let mut controller = docked_controller(DockPosition::OutsideRight, (510.0, 150.0));
        controller.child_move_handler(800.0, 150.0);
        assert!(!controller.is_docked());
        let before = moves(&controller);
        controller.display_server.move_window_by(HOST, 10.0, 10.0);
        controller.handle_events();
        assert_eq!(moves(&controller), before);
    }

    #[test]
    fn resize_should_keep_the_edge_relation() {
        // host (100, 100, 400x300) grows to 500x400, child is 100x50
        let cases = [
            (DockPosition::InsideLeft, (110.0, 150.0), (100.0, 150.0)),
            (DockPosition::InsideRight, (390.0, 150.0), (500.0, 150.0)),
            (DockPosition::OutsideLeft, (10.0, 150.0), (0.0, 150.0)),
            (DockPosition::OutsideRight, (510.0, 150.0), (600.0, 150.0)),
            (DockPosition::InsideTop, (200.0, 110.0), (200.0, 100.0)),
            (DockPosition::InsideBottom, (200.0, 340.0), (200.0, 450.0)),
            (DockPosition::OutsideTop, (200.0, 40.0), (200.0, 50.0)),
            (DockPosition::OutsideBottom, (200.0, 410.0), (200.0, 500.0)),
        ];
        for (position, drag_to, (x, y)) in cases {
            let mut controller = docked_controller(position, drag_to);
            controller.display_server.resize_window(HOST, 500.0, 400.0);
            controller.handle_events();
            assert_eq!(
                controller.child_position(),
                Point::new(x, y),
                "wrong position after resize for {position}"
            );
        }
    }

    #[test]
    fn resize_scenario_with_decorated_host() {
        let mut controller = TestController::new_test(
            TestConfig {
                positions: DockPositionSet::INSIDE_LEFT | DockPositionSet::OUTSIDE_RIGHT,
                title_bar_height: 20.0,
                ..TestConfig::default()
            },
            WindowFrame::new(Xyhw::new(100.0, 100.0, 800.0, 600.0), true),
            frameless(150.0, 100.0, 200.0, 300.0),
        );
        let (host, _) = controller.effective_geometry().expect("both windows exist");
        assert_eq!(host.top(), 80.0);

        controller.child_move_handler(105.0, 100.0);
        assert_eq!(controller.active_position(), Some(DockPosition::InsideLeft));
        assert_eq!(controller.child_position(), Point::new(100.0, 100.0));

        controller.display_server.resize_window(HOST, 900.0, 600.0);
        controller.handle_events();
        assert_eq!(controller.child_position(), Point::new(100.0, 100.0));
    }

    #[test]
    fn events_from_other_windows_are_unhandled() {
        let mut controller = docked_controller(DockPosition::OutsideRight, (510.0, 150.0));
        let before = moves(&controller);
        let stranger = WindowHandle(99);
        assert!(!controller.host_change_handler(&DisplayEvent::HostMoved(stranger)));
        assert!(!controller.host_change_handler(&DisplayEvent::HostResized(stranger)));
        assert!(!controller.host_change_handler(&DisplayEvent::HostDestroyed(stranger)));
        assert_eq!(moves(&controller), before);
        assert!(controller.is_attached());
    }

    #[test]
    fn host_destroyed_should_close_the_child() {
        let mut controller = docked_controller(DockPosition::OutsideRight, (510.0, 150.0));
        controller.display_server.destroy_window(HOST);
        assert!(controller.handle_events());
        assert!(!controller.is_attached());
        assert!(!controller.is_docked());
        assert_eq!(controller.display_server.watched, vec![HOST]);

        let log = controller.display_server.log.clone();
        drop(controller);
        let log = log.borrow();
        assert_eq!(log.last(), Some(&DisplayAction::CloseWindow(CHILD)));
        assert!(!log.contains(&DisplayAction::UnwatchWindow(HOST)));
    }
}
