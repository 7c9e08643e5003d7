//! Window Information
use std::fmt::Debug;

use super::WindowState;
use super::WindowType;
use super::WorkspaceId;
use super::Xyhw;
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
/// Using generics here with serde derive macros causes some wierd behaviour with the compiler, so
/// as suggested by [this `serde` issue][serde-issue], just adding `#[serde(bound = "")]`
/// everywhere the generic is declared fixes the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
#[cfg(test)]
pub type MockHandle = i32;
#[cfg(test)]
impl Handle for MockHandle {}

/// Snapshot of a window as the display server reported it.
///
/// Nothing in here is written back; the only change ever made to a real window is the
/// [`crate::DisplayAction::MoveResize`] issued for the active one.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Window<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub name: Option<String>,
    pub r#type: WindowType,
    pub states: Vec<WindowState>,
    /// `None` for windows on every workspace (sticky / pinned).
    pub workspace: Option<WorkspaceId>,
    /// Whether the window is within the viewport of its workspace.
    pub in_viewport: bool,
    geometry: Xyhw,
}

impl<H: Handle> Window<H> {
    #[must_use]
    pub fn new(h: WindowHandle<H>, name: Option<String>) -> Self {
        Self {
            handle: h,
            name,
            r#type: WindowType::Normal,
            states: vec![],
            workspace: None,
            in_viewport: true,
            geometry: Xyhw::default(),
        }
    }

    #[must_use]
    pub const fn geometry(&self) -> Xyhw {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Xyhw) {
        self.geometry = geometry;
    }

    #[must_use]
    pub fn is_minimized(&self) -> bool {
        self.states.contains(&WindowState::Hidden)
    }

    #[must_use]
    pub fn is_maximized(&self) -> bool {
        self.states.contains(&WindowState::Maximized)
    }

    #[must_use]
    pub fn is_shaded(&self) -> bool {
        self.states.contains(&WindowState::Shaded)
    }

    /// Desktops, docks and splash screens never show up in a task list, whatever their state
    /// says.
    #[must_use]
    pub fn is_skip_taskbar(&self) -> bool {
        self.states.contains(&WindowState::SkipTaskbar)
            || matches!(
                self.r#type,
                WindowType::Desktop | WindowType::Dock | WindowType::Splash
            )
    }

    #[must_use]
    pub fn is_dock(&self) -> bool {
        self.r#type == WindowType::Dock
    }

    /// A window without a workspace is on all of them.
    #[must_use]
    pub fn is_pinned(&self) -> bool {
        self.workspace.is_none()
    }
}

#[cfg(test)]
impl Window<MockHandle> {
    pub(crate) fn new_test(id: MockHandle, geometry: Xyhw) -> Self {
        let mut window = Self::new(WindowHandle(id), Some(format!("window-{id}")));
        window.set_geometry(geometry);
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_be_pinned_without_a_workspace() {
        let mut subject = Window::new(WindowHandle::<MockHandle>(1), None);
        assert!(subject.is_pinned(), "new windows are on every workspace");
        subject.workspace = Some(2);
        assert!(!subject.is_pinned());
    }

    #[test]
    fn docks_are_always_skipped_by_the_taskbar() {
        let mut subject = Window::new(WindowHandle::<MockHandle>(1), None);
        assert!(!subject.is_skip_taskbar());
        subject.r#type = WindowType::Dock;
        assert!(subject.is_skip_taskbar());
        assert!(subject.is_dock());
    }

    #[test]
    fn states_map_onto_predicates() {
        let mut subject = Window::new(WindowHandle::<MockHandle>(1), None);
        subject.states = vec![WindowState::Hidden, WindowState::Shaded];
        assert!(subject.is_minimized());
        assert!(subject.is_shaded());
        assert!(!subject.is_maximized());
        subject.states = vec![WindowState::MaximizedVert];
        assert!(!subject.is_maximized(), "half maximized is not maximized");
    }
}
