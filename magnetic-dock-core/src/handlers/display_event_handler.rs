use crate::DisplayEvent;
use crate::config::Config;
use crate::controller::DockController;
use crate::display_servers::DisplayServer;
use crate::models::Handle;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> DockController<H, C, SERVER> {
    /// Process a single event. Returns true if the child was moved or
    /// closed, or the controller let go of the host.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) -> bool {
        match event {
            DisplayEvent::ChildMoved(handle, x, y) if handle == self.child => {
                self.child_move_handler(x, y)
            }

            DisplayEvent::ChildClosed(handle) if handle == self.child => {
                let was_attached = self.attached;
                self.teardown();
                was_attached
            }

            DisplayEvent::ChildMoved(..) | DisplayEvent::ChildClosed(_) => false,

            host_event => self.host_change_handler(&host_event),
        }
    }

    /// Drain the display server's pending events and process them in the
    /// order they were delivered.
    pub fn handle_events(&mut self) -> bool {
        let mut changed = false;
        for event in self.display_server.get_next_events() {
            changed = self.display_event_handler(event) || changed;
        }
        changed
    }
}
