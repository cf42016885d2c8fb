#[cfg(test)]
mod mock_display_server;

use crate::DisplayAction;
use crate::DisplayEvent;
use crate::models::{Handle, WindowFrame, WindowHandle};

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The toolkit side of docking: window geometry, notifications and the
/// commands the controller issues.
pub trait DisplayServer<H: Handle> {
    /// Current geometry of a window, `None` once it no longer exists.
    fn window_frame(&self, handle: &WindowHandle<H>) -> Option<WindowFrame>;

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        vec![]
    }

    fn execute_action(&mut self, act: DisplayAction<H>);
}
