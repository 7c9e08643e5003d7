use super::{Screen, Xyhw, XyhwBuilder};
use serde::{Deserialize, Serialize};

/// Edges of a rectangle, as opposed to an origin and a size.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    /// The whole screen.
    #[must_use]
    pub const fn of_screen(screen: &Screen) -> Self {
        Self {
            left: 0,
            top: 0,
            right: screen.width,
            bottom: screen.height,
        }
    }

    /// Zero when the edges have crossed.
    #[must_use]
    pub const fn width(&self) -> i32 {
        span(self.left, self.right)
    }

    /// Zero when the edges have crossed.
    #[must_use]
    pub const fn height(&self) -> i32 {
        span(self.top, self.bottom)
    }
}

const fn span(start: i32, end: i32) -> i32 {
    if end > start {
        end - start
    } else {
        0
    }
}

impl From<Bounds> for Xyhw {
    fn from(bounds: Bounds) -> Self {
        XyhwBuilder {
            x: bounds.left,
            y: bounds.top,
            w: bounds.width(),
            h: bounds.height(),
        }
        .into()
    }
}

impl From<Xyhw> for Bounds {
    fn from(xyhw: Xyhw) -> Self {
        Self {
            left: xyhw.x(),
            top: xyhw.y(),
            right: xyhw.right(),
            bottom: xyhw.bottom(),
        }
    }
}
