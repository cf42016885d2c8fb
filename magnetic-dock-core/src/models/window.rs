//! Window Information
use std::fmt::Debug;

use crate::models::Xyhw;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Default + 'static
{
}

/// A Backend-agnostic handle to a window used to identify it
///
/// # Serde
///
/// Using generics here with serde derive macros needs `#[serde(bound = "")]`
/// everywhere the generic is declared, see
/// [this `serde` issue](https://github.com/serde-rs/serde/issues/1296).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
#[cfg(test)]
pub type MockHandle = i32;
#[cfg(test)]
impl Handle for MockHandle {}

/// What the display server knows about a window's geometry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct WindowFrame {
    /// The client area, excluding any native decoration.
    pub geometry: Xyhw,
    /// Whether the window carries a native title bar.
    pub decorated: bool,
}

impl WindowFrame {
    #[must_use]
    pub const fn new(geometry: Xyhw, decorated: bool) -> Self {
        Self {
            geometry,
            decorated,
        }
    }

    #[must_use]
    pub const fn frameless(geometry: Xyhw) -> Self {
        Self::new(geometry, false)
    }

    /// The rectangle used for edge comparisons: the client area plus the
    /// title bar for decorated windows, the raw geometry otherwise.
    #[must_use]
    pub fn effective(&self, title_bar_height: f64) -> Xyhw {
        if self.decorated {
            self.geometry.with_title_bar(title_bar_height)
        } else {
            self.geometry
        }
    }
}
