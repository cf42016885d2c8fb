//! Edge relations a child window can dock to.
use super::{Point, Xyhw};
use crate::errors::DockError;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The axis a dock position constrains.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A single edge relation between the child and the host.
///
/// `Inside*` aligns the child's edge with the host's same-side edge while
/// overlapping the host. `Outside*` places the child flush against the
/// host's edge, outside its bounds.
///
/// Parsing accepts any case and ignores separators, so `outside-right`,
/// `outside_right` and `OutsideRight` are the same position.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "String")]
pub enum DockPosition {
    InsideLeft,
    InsideRight,
    OutsideLeft,
    OutsideRight,
    InsideTop,
    InsideBottom,
    OutsideTop,
    OutsideBottom,
}

impl DockPosition {
    /// Every position, in snap evaluation order.
    pub const ALL: [Self; 8] = [
        Self::InsideLeft,
        Self::InsideRight,
        Self::OutsideLeft,
        Self::OutsideRight,
        Self::InsideTop,
        Self::InsideBottom,
        Self::OutsideTop,
        Self::OutsideBottom,
    ];

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::InsideLeft | Self::InsideRight | Self::OutsideLeft | Self::OutsideRight => {
                Axis::Horizontal
            }
            Self::InsideTop | Self::InsideBottom | Self::OutsideTop | Self::OutsideBottom => {
                Axis::Vertical
            }
        }
    }

    #[must_use]
    pub const fn is_inside(self) -> bool {
        matches!(
            self,
            Self::InsideLeft | Self::InsideRight | Self::InsideTop | Self::InsideBottom
        )
    }

    /// Distance between the pair of edges this position aligns.
    #[must_use]
    pub fn edge_distance(self, host: &Xyhw, child: &Xyhw) -> f64 {
        let delta = match self {
            Self::InsideLeft => host.left() - child.left(),
            Self::InsideRight => host.right() - child.right(),
            Self::OutsideLeft => host.left() - child.right(),
            Self::OutsideRight => host.right() - child.left(),
            Self::InsideTop => host.top() - child.top(),
            Self::InsideBottom => host.bottom() - child.bottom(),
            Self::OutsideTop => host.top() - child.bottom(),
            Self::OutsideBottom => host.bottom() - child.top(),
        };
        delta.abs()
    }

    /// The child rectangle used for the overlap test. Outside positions
    /// shift the child towards the host by `distance` so that a child
    /// sitting just beyond the edge still counts as overlapping.
    fn overlap_test_rect(self, child: &Xyhw, distance: f64) -> Xyhw {
        match self {
            Self::OutsideLeft => child.translated(distance, 0.0),
            Self::OutsideRight => child.translated(-distance, 0.0),
            Self::OutsideTop => child.translated(0.0, distance),
            Self::OutsideBottom => child.translated(0.0, -distance),
            _ => *child,
        }
    }

    /// True when the child is close enough to this edge of the host to
    /// snap to it. The distance comparison is strict.
    #[must_use]
    pub fn attracts(self, host: &Xyhw, child: &Xyhw, distance: f64) -> bool {
        host.intersects(&self.overlap_test_rect(child, distance))
            && self.edge_distance(host, child) < distance
    }

    /// The coordinate on this position's axis the child snaps to.
    #[must_use]
    pub fn snapped_coordinate(self, host: &Xyhw, child: &Xyhw) -> f64 {
        match self {
            Self::InsideLeft => host.left(),
            Self::InsideRight => host.right() - child.w(),
            Self::OutsideLeft => host.left() - child.w(),
            Self::OutsideRight => host.right(),
            Self::InsideTop => host.top(),
            Self::InsideBottom => host.bottom() - child.h(),
            Self::OutsideTop => host.top() - child.h(),
            Self::OutsideBottom => host.bottom(),
        }
    }

    /// Where the child belongs after the host changed size, keeping this
    /// edge relation and the cross-axis component of `offset`.
    #[must_use]
    pub fn follow_resize(self, host: &Xyhw, child: &Xyhw, offset: Point) -> Point {
        let x = match self.axis() {
            Axis::Horizontal => self.snapped_coordinate(host, child),
            Axis::Vertical => host.left() - offset.x,
        };
        let y = match self.axis() {
            Axis::Horizontal => host.top() - offset.y,
            Axis::Vertical => self.snapped_coordinate(host, child),
        };
        Point::new(x, y)
    }

    #[must_use]
    pub const fn flag(self) -> DockPositionSet {
        match self {
            Self::InsideLeft => DockPositionSet::INSIDE_LEFT,
            Self::InsideRight => DockPositionSet::INSIDE_RIGHT,
            Self::OutsideLeft => DockPositionSet::OUTSIDE_LEFT,
            Self::OutsideRight => DockPositionSet::OUTSIDE_RIGHT,
            Self::InsideTop => DockPositionSet::INSIDE_TOP,
            Self::InsideBottom => DockPositionSet::INSIDE_BOTTOM,
            Self::OutsideTop => DockPositionSet::OUTSIDE_TOP,
            Self::OutsideBottom => DockPositionSet::OUTSIDE_BOTTOM,
        }
    }
}

impl fmt::Display for DockPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for DockPosition {
    type Err = DockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|position| position.to_string().to_ascii_lowercase() == wanted)
            .ok_or_else(|| DockError::InvalidPosition(s.to_owned()))
    }
}

impl TryFrom<String> for DockPosition {
    type Error = DockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

bitflags! {
    /// The set of positions a child window is allowed to dock to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DockPositionSet: u8 {
        const INSIDE_LEFT = 1 << 0;
        const INSIDE_RIGHT = 1 << 1;
        const OUTSIDE_LEFT = 1 << 2;
        const OUTSIDE_RIGHT = 1 << 3;
        const INSIDE_TOP = 1 << 4;
        const INSIDE_BOTTOM = 1 << 5;
        const OUTSIDE_TOP = 1 << 6;
        const OUTSIDE_BOTTOM = 1 << 7;
    }
}

impl Default for DockPositionSet {
    fn default() -> Self {
        Self::all()
    }
}

impl DockPositionSet {
    #[must_use]
    pub const fn allows(&self, position: DockPosition) -> bool {
        self.contains(position.flag())
    }

    /// The enabled positions, in snap evaluation order.
    pub fn positions(self) -> impl Iterator<Item = DockPosition> {
        DockPosition::ALL
            .into_iter()
            .filter(move |position| self.allows(*position))
    }
}

impl From<DockPosition> for DockPositionSet {
    fn from(position: DockPosition) -> Self {
        position.flag()
    }
}

impl FromIterator<DockPosition> for DockPositionSet {
    fn from_iter<I: IntoIterator<Item = DockPosition>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, position| set | position.flag())
    }
}
