use crate::models::Handle;
use crate::models::WindowHandle;
use crate::models::Xyhw;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Reference point of a window that stays put while it is moved or resized.
///
/// The values are the X11 / EWMH gravity constants.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Gravity {
    /// Use the gravity the window asked for.
    Current = 0,
    NorthWest = 1,
    North = 2,
    NorthEast = 3,
    West = 4,
    Center = 5,
    East = 6,
    SouthWest = 7,
    South = 8,
    SouthEast = 9,
    /// The top left corner of the client area, ignoring decorations.
    Static = 10,
}

bitflags! {
    /// Which parts of a window's geometry a move/resize changes.
    #[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MoveResizeFlags: u8 {
        const X = 1;
        const Y = 1 << 1;
        const WIDTH = 1 << 2;
        const HEIGHT = 1 << 3;
        const MOVE = Self::X.bits() | Self::Y.bits();
        const RESIZE = Self::WIDTH.bits() | Self::HEIGHT.bits();
    }
}

/// These are requests from the layout engine.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum DisplayAction<H: Handle> {
    /// Move and/or resize a window.
    #[serde(bound = "")]
    MoveResize {
        window: WindowHandle<H>,
        gravity: Gravity,
        flags: MoveResizeFlags,
        geometry: Xyhw,
    },
}
