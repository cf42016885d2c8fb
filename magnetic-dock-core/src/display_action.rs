use crate::models::{Handle, WindowHandle};
use serde::{Deserialize, Serialize};

/// These are requests from the dock controller.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum DisplayAction<H: Handle> {
    /// Move the top-left corner of a window's frame to (x, y).
    #[serde(bound = "")]
    MoveWindow(WindowHandle<H>, f64, f64),

    /// Close a window.
    #[serde(bound = "")]
    CloseWindow(WindowHandle<H>),

    /// Start delivering move, resize and destroy notifications for a
    /// window.
    #[serde(bound = "")]
    WatchWindow(WindowHandle<H>),

    /// Stop delivering notifications for a window.
    #[serde(bound = "")]
    UnwatchWindow(WindowHandle<H>),
}
