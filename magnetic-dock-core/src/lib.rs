//! Magnetic docking of a child window to a host window.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::float_cmp,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod config;
mod controller;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod handlers;
pub mod models;

pub use config::{Config, ConflictResolution};
pub use controller::DockController;
pub use display_action::DisplayAction;
pub use display_event::DisplayEvent;
pub use display_servers::DisplayServer;
pub use models::{
    Axis, DockPosition, DockPositionSet, DockState, Handle, Point, WindowFrame, WindowHandle,
    Xyhw,
};
