use super::{Xyhw, XyhwBuilder};
use serde::{Deserialize, Serialize};

/// The display area the windows live on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: i32,
    pub height: i32,
}

impl Screen {
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn xyhw(&self) -> Xyhw {
        XyhwBuilder {
            w: self.width,
            h: self.height,
            ..XyhwBuilder::default()
        }
        .into()
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}
