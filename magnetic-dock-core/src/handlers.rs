mod child_move_handler;
mod display_event_handler;
mod host_change_handler;

#[cfg(test)]
pub(crate) use crate::controller::tests::{CHILD, HOST, TestController};
