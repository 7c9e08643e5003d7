use super::{expand, fill, Layout, LayoutHandler, EXPAND, FILL};
use crate::models::Handle;

/// The [`LayoutRegistry`] holds the set of known [`Layout`]s.
///
/// It is built once at startup and never changes afterwards; callers hold it by reference.
#[derive(Debug, Clone)]
pub struct LayoutRegistry<H: Handle> {
    layouts: Vec<Layout<H>>,
}

impl<H: Handle> Default for LayoutRegistry<H> {
    fn default() -> Self {
        Self::new(vec![
            Layout {
                name: EXPAND,
                handler: expand as LayoutHandler<H>,
            },
            Layout {
                name: FILL,
                handler: fill as LayoutHandler<H>,
            },
        ])
    }
}

impl<H: Handle> LayoutRegistry<H> {
    /// Create a registry from an explicit list of layouts. The first layout with a given name
    /// shadows any later ones.
    #[must_use]
    pub fn new(layouts: Vec<Layout<H>>) -> Self {
        let mut unique: Vec<Layout<H>> = Vec::with_capacity(layouts.len());
        for layout in layouts {
            if unique.iter().any(|l| l.name == layout.name) {
                tracing::warn!("Layout {:?} is registered twice, ignoring the second", layout.name);
                continue;
            }
            unique.push(layout);
        }
        Self { layouts: unique }
    }

    /// Look up a layout by its name.
    pub fn get(&self, name: &str) -> Option<&Layout<H>> {
        self.layouts.iter().find(|layout| layout.name == name)
    }

    /// All layout names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.layouts.iter().map(|layout| layout.name)
    }
}
