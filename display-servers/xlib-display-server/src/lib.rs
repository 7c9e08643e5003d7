// allow casting types
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod xatom;
mod xwrap;

use serde::{Deserialize, Serialize};
pub use xwrap::{XWrap, XlibError};

use wrangle_core::models::{Handle, Screen, Window, WindowHandle, WorkspaceId, Xyhw};
use wrangle_core::{DisplayAction, DisplayServer, Result};

use x11_dl::xlib;

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct XlibWindowHandle(xlib::Window);
impl Handle for XlibWindowHandle {}

/// Talks to an EWMH compliant window manager through its root window properties.
pub struct XlibDisplayServer {
    xw: XWrap,
}

impl XlibDisplayServer {
    /// Connect to the display named by `$DISPLAY`.
    ///
    /// # Errors
    ///
    /// Fails if xlib cannot be loaded or there is no X server to talk to.
    pub fn new() -> std::result::Result<Self, XlibError> {
        Ok(Self { xw: XWrap::new()? })
    }

    fn window(
        &self,
        handle: xlib::Window,
        screen: &Screen,
        shown: (i32, i32),
    ) -> Option<Window<XlibWindowHandle>> {
        let geometry = match self.xw.get_window_geometry(handle) {
            Ok(geometry) => geometry,
            Err(err) => {
                tracing::debug!("Skipping window {:#x}: {}", handle, err);
                return None;
            }
        };
        let mut window = Window::new(
            WindowHandle(XlibWindowHandle(handle)),
            self.xw.get_window_name(handle),
        );
        window.r#type = self.xw.get_window_type(handle);
        window.states = self.xw.get_window_states(handle);
        window.workspace = self.xw.get_window_desktop(handle);
        let viewport = window
            .workspace
            .map(|desktop| self.xw.get_desktop_viewport(Some(desktop)));
        window.in_viewport = in_viewport(screen, shown, viewport, &geometry);
        window.set_geometry(geometry);
        tracing::trace!("Window: {:?}", window);
        Some(window)
    }
}

impl DisplayServer<XlibWindowHandle> for XlibDisplayServer {
    fn screen(&self) -> Result<Screen> {
        Ok(self.xw.get_screen())
    }

    fn windows(&self) -> Result<Vec<Window<XlibWindowHandle>>> {
        let screen = self.xw.get_screen();
        let shown = self
            .xw
            .get_desktop_viewport(self.xw.get_current_desktop());
        let clients = self.xw.get_client_list()?;
        Ok(clients
            .into_iter()
            .filter_map(|handle| self.window(handle, &screen, shown))
            .collect())
    }

    fn active_window(&self) -> Option<WindowHandle<XlibWindowHandle>> {
        self.xw
            .get_active_window()
            .map(|handle| WindowHandle(XlibWindowHandle(handle)))
    }

    fn current_workspace(&self) -> Option<WorkspaceId> {
        self.xw.get_current_desktop()
    }

    fn execute_action(&mut self, act: DisplayAction<XlibWindowHandle>) -> Result<()> {
        tracing::trace!("DisplayAction: {:?}", act);
        match act {
            DisplayAction::MoveResize {
                window: WindowHandle(XlibWindowHandle(window)),
                gravity,
                flags,
                geometry,
            } => self.xw.move_resize_window(window, gravity, flags, geometry)?,
        }
        Ok(())
    }

    fn flush(&self) {
        self.xw.flush();
    }
}

/// Whether a window overlaps the viewport of its desktop.
///
/// Root coordinates are relative to the viewport being `shown`. Windows on all desktops have
/// no `viewport` of their own and are measured against the shown one.
fn in_viewport(
    screen: &Screen,
    shown: (i32, i32),
    viewport: Option<(i32, i32)>,
    geometry: &Xyhw,
) -> bool {
    let viewport = viewport.unwrap_or(shown);
    let mut window = *geometry;
    window.set_x(geometry.x() + shown.0);
    window.set_y(geometry.y() + shown.1);
    let mut area = screen.xyhw();
    area.set_x(viewport.0);
    area.set_y(viewport.1);
    area.intersects(&window)
}
