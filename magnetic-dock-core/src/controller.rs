use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::errors::{DockError, Result};
use crate::models::{DockPosition, DockPositionSet, DockState, Handle, Point, WindowHandle, Xyhw};

/// Keeps a child window docked to the edges of a host window.
///
/// The controller does not own either window. It watches the host through
/// the display server from construction until [`teardown`], and only ever
/// moves or closes the child.
///
/// [`teardown`]: DockController::teardown
pub struct DockController<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    pub config: C,
    pub display_server: SERVER,
    pub(crate) host: WindowHandle<H>,
    pub(crate) child: WindowHandle<H>,
    pub(crate) positions: DockPositionSet,
    pub(crate) state: DockState,
    pub(crate) attached: bool,
}

impl<H, C, SERVER> DockController<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    /// Bind `child` to `host` and start watching the host.
    ///
    /// # Errors
    ///
    /// Fails when the display server knows neither the host nor the child.
    ///
    /// # Panics
    ///
    /// Panics when `host` and `child` are the same window.
    pub fn new(
        host: WindowHandle<H>,
        child: WindowHandle<H>,
        config: C,
        mut display_server: SERVER,
    ) -> Result<Self> {
        assert!(host != child, "a window cannot be docked to itself");
        for handle in [&host, &child] {
            if display_server.window_frame(handle).is_none() {
                return Err(DockError::WindowNotFound(format!("{:?}", handle.0)));
            }
        }

        let positions = config.dock_positions();
        display_server.execute_action(DisplayAction::WatchWindow(host));
        tracing::debug!(?host, ?child, ?positions, "Watching host window");

        Ok(Self {
            config,
            display_server,
            host,
            child,
            positions,
            state: DockState::Undocked,
            attached: true,
        })
    }

    #[must_use]
    pub const fn host(&self) -> &WindowHandle<H> {
        &self.host
    }

    #[must_use]
    pub const fn child(&self) -> &WindowHandle<H> {
        &self.child
    }

    #[must_use]
    pub const fn positions(&self) -> DockPositionSet {
        self.positions
    }

    #[must_use]
    pub const fn state(&self) -> DockState {
        self.state
    }

    #[must_use]
    pub const fn is_docked(&self) -> bool {
        self.state.is_docked()
    }

    #[must_use]
    pub const fn active_position(&self) -> Option<DockPosition> {
        self.state.position()
    }

    /// False once the host was destroyed, the child closed, or the
    /// controller was torn down.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Title-bar adjusted rectangles of the host and the child, in that
    /// order. `None` if either window no longer exists.
    #[must_use]
    pub fn effective_geometry(&self) -> Option<(Xyhw, Xyhw)> {
        let title_bar_height = self.config.title_bar_height();
        let host = self.display_server.window_frame(&self.host)?;
        let child = self.display_server.window_frame(&self.child)?;
        Some((
            host.effective(title_bar_height),
            child.effective(title_bar_height),
        ))
    }

    /// Stop watching the host. Safe to call more than once.
    pub fn teardown(&mut self) {
        if !self.attached {
            return;
        }
        self.detach();
        self.display_server
            .execute_action(DisplayAction::UnwatchWindow(self.host));
        tracing::debug!(host = ?self.host, "Stopped watching host window");
    }

    pub(crate) fn detach(&mut self) {
        self.attached = false;
        self.state = DockState::Undocked;
    }

    pub(crate) fn move_child(&mut self, pos: Point) {
        tracing::trace!(child = ?self.child, x = pos.x, y = pos.y, "Moving child window");
        self.display_server
            .execute_action(DisplayAction::MoveWindow(self.child, pos.x, pos.y));
    }
}

impl<H, C, SERVER> Drop for DockController<H, C, SERVER>
where
    H: Handle,
    C: Config,
    SERVER: DisplayServer<H>,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
