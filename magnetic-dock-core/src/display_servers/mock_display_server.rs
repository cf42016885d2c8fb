use super::DisplayServer;
use crate::DisplayAction;
use crate::DisplayEvent;
use crate::models::{Handle, WindowFrame, WindowHandle};
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory display server. Executed actions are recorded in a shared log
/// so they can still be inspected after the controller owning the server
/// has been dropped.
#[derive(Clone)]
pub struct MockDisplayServer<H: Handle> {
    pub title_bar_height: f64,
    pub windows: Vec<(WindowHandle<H>, WindowFrame)>,
    pub watched: Vec<WindowHandle<H>>,
    pub events: Vec<DisplayEvent<H>>,
    pub log: Rc<RefCell<Vec<DisplayAction<H>>>>,
}

impl<H: Handle> MockDisplayServer<H> {
    pub fn new(title_bar_height: f64) -> Self {
        Self {
            title_bar_height,
            windows: vec![],
            watched: vec![],
            events: vec![],
            log: Rc::default(),
        }
    }

    pub fn with_window(mut self, handle: WindowHandle<H>, frame: WindowFrame) -> Self {
        self.windows.push((handle, frame));
        self
    }

    pub fn actions(&self) -> Vec<DisplayAction<H>> {
        self.log.borrow().clone()
    }

    fn frame_mut(&mut self, handle: &WindowHandle<H>) -> Option<&mut WindowFrame> {
        self.windows
            .iter_mut()
            .find(|(h, _)| h == handle)
            .map(|(_, frame)| frame)
    }

    /// Moves a window the way a user would and queues the notification.
    pub fn move_window_by(&mut self, handle: WindowHandle<H>, dx: f64, dy: f64) {
        if let Some(frame) = self.frame_mut(&handle) {
            frame.geometry = frame.geometry.translated(dx, dy);
            self.events.push(DisplayEvent::HostMoved(handle));
        }
    }

    pub fn resize_window(&mut self, handle: WindowHandle<H>, w: f64, h: f64) {
        if let Some(frame) = self.frame_mut(&handle) {
            frame.geometry.set_w(w);
            frame.geometry.set_h(h);
            self.events.push(DisplayEvent::HostResized(handle));
        }
    }

    pub fn destroy_window(&mut self, handle: WindowHandle<H>) {
        self.windows.retain(|(h, _)| h != &handle);
        self.events.push(DisplayEvent::HostDestroyed(handle));
    }
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn window_frame(&self, handle: &WindowHandle<H>) -> Option<WindowFrame> {
        self.windows
            .iter()
            .find(|(h, _)| h == handle)
            .map(|(_, frame)| *frame)
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        std::mem::take(&mut self.events)
    }

    fn execute_action(&mut self, act: DisplayAction<H>) {
        let title_bar_height = self.title_bar_height;
        match &act {
            DisplayAction::MoveWindow(handle, x, y) => {
                if let Some(frame) = self.frame_mut(handle) {
                    let top = if frame.decorated {
                        y + title_bar_height
                    } else {
                        *y
                    };
                    frame.geometry.set_x(*x);
                    frame.geometry.set_y(top);
                }
            }
            DisplayAction::CloseWindow(handle) => {
                self.windows.retain(|(h, _)| h != handle);
            }
            DisplayAction::WatchWindow(handle) => self.watched.push(*handle),
            DisplayAction::UnwatchWindow(handle) => self.watched.retain(|h| h != handle),
        }
        self.log.borrow_mut().push(act);
    }
}
