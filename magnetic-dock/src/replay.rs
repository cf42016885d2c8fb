//! Replaying scripted docking sessions against an in-memory display server.
use crate::Config;
use anyhow::Result;
use magnetic_dock_core::{
    DisplayAction, DisplayEvent, DisplayServer, DockController, DockState, Handle, Point,
    WindowFrame, WindowHandle, Xyhw,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Window handle used by [`ScriptedDisplayServer`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptHandle(pub u32);
impl Handle for ScriptHandle {}

pub const HOST: WindowHandle<ScriptHandle> = WindowHandle(ScriptHandle(1));
pub const CHILD: WindowHandle<ScriptHandle> = WindowHandle(ScriptHandle(2));

/// Client geometry of a window in a scenario file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WindowSpec {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default)]
    pub decorated: bool,
}

impl From<WindowSpec> for WindowFrame {
    fn from(spec: WindowSpec) -> Self {
        Self::new(Xyhw::new(spec.x, spec.y, spec.w, spec.h), spec.decorated)
    }
}

/// Something that happens to the windows during a session.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// The user drags the child so its frame's top-left is at (x, y).
    DragChild { x: f64, y: f64 },
    MoveHost { dx: f64, dy: f64 },
    ResizeHost { w: f64, h: f64 },
    DestroyHost,
    CloseChild,
}

/// A scripted session.
///
/// ```toml
/// host = { x = 100.0, y = 100.0, w = 800.0, h = 600.0, decorated = true }
/// child = { x = 150.0, y = 100.0, w = 200.0, h = 300.0 }
///
/// [[steps]]
/// step = "drag_child"
/// x = 105.0
/// y = 100.0
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    pub host: WindowSpec,
    pub child: WindowSpec,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// # Errors
    ///
    /// Errors if the file cannot be read or is not a valid scenario.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Display server holding a host and a child window in memory. Steps
/// change the windows and queue the matching notifications; executed
/// actions are collected until taken with [`take_actions`].
///
/// [`take_actions`]: ScriptedDisplayServer::take_actions
#[derive(Debug, Clone)]
pub struct ScriptedDisplayServer {
    title_bar_height: f64,
    host: Option<WindowFrame>,
    child: Option<WindowFrame>,
    watched: bool,
    events: Vec<DisplayEvent<ScriptHandle>>,
    actions: Vec<DisplayAction<ScriptHandle>>,
}

impl ScriptedDisplayServer {
    #[must_use]
    pub fn new(scenario: &Scenario, title_bar_height: f64) -> Self {
        Self {
            title_bar_height,
            host: Some(scenario.host.into()),
            child: Some(scenario.child.into()),
            watched: false,
            events: vec![],
            actions: vec![],
        }
    }

    /// Apply a step to the windows and queue the notification it causes.
    /// Host notifications are only delivered while the host is watched.
    pub fn apply(&mut self, step: Step) {
        let event = match step {
            Step::DragChild { x, y } => {
                let title_bar_height = self.title_bar_height;
                self.child.as_mut().map(|frame| {
                    place(frame, x, y, title_bar_height);
                    DisplayEvent::ChildMoved(CHILD, x, y)
                })
            }
            Step::MoveHost { dx, dy } => self.host.as_mut().map(|frame| {
                frame.geometry = frame.geometry.translated(dx, dy);
                DisplayEvent::HostMoved(HOST)
            }),
            Step::ResizeHost { w, h } => self.host.as_mut().map(|frame| {
                frame.geometry.set_w(w);
                frame.geometry.set_h(h);
                DisplayEvent::HostResized(HOST)
            }),
            Step::DestroyHost => self
                .host
                .take()
                .map(|_| DisplayEvent::HostDestroyed(HOST)),
            Step::CloseChild => self.child.take().map(|_| DisplayEvent::ChildClosed(CHILD)),
        };
        match event {
            Some(event) if self.watched || event.source() == &CHILD => self.events.push(event),
            Some(_) | None => {}
        }
    }

    pub fn take_actions(&mut self) -> Vec<DisplayAction<ScriptHandle>> {
        std::mem::take(&mut self.actions)
    }

    fn frame_mut(&mut self, handle: &WindowHandle<ScriptHandle>) -> Option<&mut WindowFrame> {
        if handle == &HOST {
            self.host.as_mut()
        } else if handle == &CHILD {
            self.child.as_mut()
        } else {
            None
        }
    }
}

/// Move a window so the top-left of its frame is at (x, y).
fn place(frame: &mut WindowFrame, x: f64, y: f64, title_bar_height: f64) {
    let top = if frame.decorated {
        y + title_bar_height
    } else {
        y
    };
    frame.geometry = frame.geometry.moved_to(Point::new(x, top));
}

impl DisplayServer<ScriptHandle> for ScriptedDisplayServer {
    fn window_frame(&self, handle: &WindowHandle<ScriptHandle>) -> Option<WindowFrame> {
        if handle == &HOST {
            self.host
        } else if handle == &CHILD {
            self.child
        } else {
            None
        }
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<ScriptHandle>> {
        std::mem::take(&mut self.events)
    }

    fn execute_action(&mut self, act: DisplayAction<ScriptHandle>) {
        let title_bar_height = self.title_bar_height;
        match &act {
            DisplayAction::MoveWindow(handle, x, y) => {
                if let Some(frame) = self.frame_mut(handle) {
                    place(frame, *x, *y, title_bar_height);
                }
            }
            DisplayAction::CloseWindow(handle) => {
                if handle == &HOST {
                    self.host = None;
                } else if handle == &CHILD {
                    self.child = None;
                }
            }
            DisplayAction::WatchWindow(handle) => self.watched |= handle == &HOST,
            DisplayAction::UnwatchWindow(handle) => self.watched &= handle != &HOST,
        }
        self.actions.push(act);
    }
}

/// What the controller did in response to one step.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StepReport {
    pub step: Step,
    pub actions: Vec<DisplayAction<ScriptHandle>>,
    pub state: DockState,
}

/// Run every step of `scenario` through a dock controller.
///
/// # Errors
///
/// Errors if the controller cannot be created for the scenario's windows.
pub fn replay(scenario: &Scenario, config: Config) -> Result<Vec<StepReport>> {
    let server = ScriptedDisplayServer::new(scenario, config.title_bar_height);
    let mut controller = DockController::new(HOST, CHILD, config, server)?;
    controller.display_server.take_actions();

    let mut reports = Vec::with_capacity(scenario.steps.len());
    for step in &scenario.steps {
        controller.display_server.apply(*step);
        controller.handle_events();
        reports.push(StepReport {
            step: *step,
            actions: controller.display_server.take_actions(),
            state: controller.state(),
        });
    }
    Ok(reports)
}
