use crate::models::{Handle, WindowHandle};
use serde::{Deserialize, Serialize};

/// Notifications delivered by the display server, in the order they
/// happened.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum DisplayEvent<H: Handle> {
    /// A watched window was moved.
    #[serde(bound = "")]
    HostMoved(WindowHandle<H>),
    /// A watched window changed size.
    #[serde(bound = "")]
    HostResized(WindowHandle<H>),
    /// A watched window was destroyed.
    #[serde(bound = "")]
    HostDestroyed(WindowHandle<H>),
    /// The user dragged the child so its top-left is now at (x, y).
    #[serde(bound = "")]
    ChildMoved(WindowHandle<H>, f64, f64),
    /// The child window was closed.
    #[serde(bound = "")]
    ChildClosed(WindowHandle<H>),
}

impl<H: Handle> DisplayEvent<H> {
    /// The window this notification originates from.
    #[must_use]
    pub const fn source(&self) -> &WindowHandle<H> {
        match self {
            Self::HostMoved(h)
            | Self::HostResized(h)
            | Self::HostDestroyed(h)
            | Self::ChildMoved(h, _, _)
            | Self::ChildClosed(h) => h,
        }
    }
}
