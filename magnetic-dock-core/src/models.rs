//! Objects (such as windows and dock positions) used to dock windows.
mod dock_position;
mod dock_state;
mod point;
mod window;
mod xyhw;

pub use dock_position::Axis;
pub use dock_position::DockPosition;
pub use dock_position::DockPositionSet;
pub use dock_state::DockState;
pub use point::Point;
pub use window::Handle;
#[cfg(test)]
pub(crate) use window::MockHandle;
pub use window::WindowFrame;
pub use window::WindowHandle;
pub use xyhw::Xyhw;
