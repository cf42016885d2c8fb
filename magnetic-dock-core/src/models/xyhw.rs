//! Window rectangles in screen coordinates.
use super::Point;
use serde::{Deserialize, Serialize};

/// Struct containing window placement and size. x,y from top left.
///
/// The right and bottom edges are exclusive: `right() == x + w`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Copy)]
pub struct Xyhw {
    x: f64,
    y: f64,
    h: f64,
    w: f64,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, h, w }
    }

    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }
    #[must_use]
    pub const fn h(&self) -> f64 {
        self.h
    }
    #[must_use]
    pub const fn w(&self) -> f64 {
        self.w
    }

    pub fn set_x(&mut self, value: f64) {
        self.x = value;
    }
    pub fn set_y(&mut self, value: f64) {
        self.y = value;
    }
    pub fn set_h(&mut self, value: f64) {
        self.h = value;
    }
    pub fn set_w(&mut self, value: f64) {
        self.w = value;
    }

    #[must_use]
    pub const fn left(&self) -> f64 {
        self.x
    }
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The same rectangle with its top-left corner at `pos`.
    #[must_use]
    pub const fn moved_to(&self, pos: Point) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            ..*self
        }
    }

    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Grow the rectangle upwards by a title bar of height `title_bar`, so
    /// the result covers the visible frame rather than only the client area.
    #[must_use]
    pub fn with_title_bar(&self, title_bar: f64) -> Self {
        Self {
            y: self.y - title_bar,
            h: self.h + title_bar,
            ..*self
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// True when the two rectangles share a non-empty area. Rectangles that
    /// only touch along an edge do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}
