mod expand;
mod fill;
mod layout_registry;

use crate::errors::Result;
use crate::models::{Handle, Screen, Window, Xyhw};
use serde::{Deserialize, Serialize};

pub use expand::expand;
pub use fill::fill;
pub use layout_registry::LayoutRegistry;

pub const EXPAND: &str = "expand";
pub const FILL: &str = "fill";

/// Computes where the active window should go.
pub type LayoutHandler<H> = fn(&LayoutContext<'_, H>) -> Result<Xyhw>;

/// A named layout.
pub struct Layout<H: Handle> {
    pub name: &'static str,
    pub handler: LayoutHandler<H>,
}

// Derived impls would require `H: Clone`/`H: Debug` on top of the `Handle` bounds.
impl<H: Handle> Clone for Layout<H> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            handler: self.handler,
        }
    }
}

impl<H: Handle> std::fmt::Debug for Layout<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layout").field("name", &self.name).finish()
    }
}

/// Tweaks to how the layouts behave.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Start expanding from the area left over by panels instead of the whole screen.
    pub expand_respects_struts: bool,
}

/// Everything a layout gets to look at.
#[derive(Debug)]
pub struct LayoutContext<'a, H: Handle> {
    pub screen: &'a Screen,
    /// The windows to arrange, see [`crate::filters::user_windows`].
    pub windows: &'a [&'a Window<H>],
    /// Panels and docks, see [`crate::filters::strut_windows`].
    pub struts: &'a [&'a Window<H>],
    pub active: Option<&'a Window<H>>,
    pub options: LayoutOptions,
}
