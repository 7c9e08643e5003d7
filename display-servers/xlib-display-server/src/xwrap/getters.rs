//! `XWrap` getters.
use super::{desktop_from_cardinal, Result, XWrap, XlibError, ICONIC_STATE, MAX_PROPERTY_VALUE_LEN};
use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_long, c_uchar, c_uint, c_ulong};
use std::slice;
use wrangle_core::models::{Screen, WindowState, WindowType, WorkspaceId, Xyhw};
use x11_dl::xlib;

impl XWrap {
    // Public functions.

    /// Returns the size of the default screen.
    // `XDefaultScreen`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultScreen
    // `XDisplayWidth`: https://tronche.com/gui/x/xlib/display/display-macros.html#DisplayWidth
    #[must_use]
    pub fn get_screen(&self) -> Screen {
        unsafe {
            let screen = (self.xlib.XDefaultScreen)(self.display);
            Screen::new(
                (self.xlib.XDisplayWidth)(self.display, screen),
                (self.xlib.XDisplayHeight)(self.display, screen),
            )
        }
    }

    /// Returns the windows the window manager manages, oldest first.
    ///
    /// # Errors
    ///
    /// Errors if the window manager does not publish `_NET_CLIENT_LIST`.
    pub fn get_client_list(&self) -> Result<Vec<xlib::Window>> {
        let clients = self
            .get_property_values(self.root, self.atoms.NetClientList, xlib::XA_WINDOW)
            .map_err(|_| XlibError::MissingProperty("_NET_CLIENT_LIST"))?;
        if clients.is_empty() && !self.has_property(self.root, self.atoms.NetClientList) {
            return Err(XlibError::MissingProperty("_NET_CLIENT_LIST"));
        }
        Ok(clients)
    }

    /// Returns the focused window, if the window manager reports one.
    #[must_use]
    pub fn get_active_window(&self) -> Option<xlib::Window> {
        self.get_property_values(self.root, self.atoms.NetActiveWindow, xlib::XA_WINDOW)
            .ok()?
            .first()
            .copied()
            .filter(|&window| window != 0)
    }

    /// Returns the desktop the user is looking at.
    #[must_use]
    pub fn get_current_desktop(&self) -> Option<WorkspaceId> {
        self.get_cardinal(self.root, self.atoms.NetCurrentDesktop)
            .and_then(desktop_from_cardinal)
    }

    /// Returns the top left corner of a desktop's viewport, `(0, 0)` if the window manager does
    /// not use large desktops.
    #[must_use]
    pub fn get_desktop_viewport(&self, desktop: Option<WorkspaceId>) -> (i32, i32) {
        let Some(desktop) = desktop else {
            return (0, 0);
        };
        self.get_property_values(self.root, self.atoms.NetDesktopViewport, xlib::XA_CARDINAL)
            .ok()
            .and_then(|viewports| {
                let x = *viewports.get(desktop * 2)?;
                let y = *viewports.get(desktop * 2 + 1)?;
                Some((x as i32, y as i32))
            })
            .unwrap_or((0, 0))
    }

    /// Returns the desktop of a window, `None` if it is on all of them or says nothing.
    #[must_use]
    pub fn get_window_desktop(&self, window: xlib::Window) -> Option<WorkspaceId> {
        self.get_cardinal(window, self.atoms.NetWMDesktop)
            .and_then(desktop_from_cardinal)
    }

    /// Returns the client area of a window in root coordinates.
    ///
    /// # Errors
    ///
    /// Errors if the window has gone away.
    // `XGetGeometry`: https://tronche.com/gui/x/xlib/window-information/XGetGeometry.html
    // `XTranslateCoordinates`: https://tronche.com/gui/x/xlib/window-information/XTranslateCoordinates.html
    pub fn get_window_geometry(&self, window: xlib::Window) -> Result<Xyhw> {
        let mut root_return: xlib::Window = 0;
        let mut x_return: c_int = 0;
        let mut y_return: c_int = 0;
        let mut width_return: c_uint = 0;
        let mut height_return: c_uint = 0;
        let mut border_width_return: c_uint = 0;
        let mut depth_return: c_uint = 0;
        let mut child_return: xlib::Window = 0;
        unsafe {
            let status = (self.xlib.XGetGeometry)(
                self.display,
                window,
                &mut root_return,
                &mut x_return,
                &mut y_return,
                &mut width_return,
                &mut height_return,
                &mut border_width_return,
                &mut depth_return,
            );
            if status == 0 {
                return Err(XlibError::FailedStatus);
            }
            // Reparenting window managers put clients inside a frame, so the position from
            // XGetGeometry is relative to that frame.
            let status = (self.xlib.XTranslateCoordinates)(
                self.display,
                window,
                self.root,
                0,
                0,
                &mut x_return,
                &mut y_return,
                &mut child_return,
            );
            if status == 0 {
                return Err(XlibError::FailedStatus);
            }
        }
        Ok(Xyhw::new(
            x_return,
            y_return,
            width_return as i32,
            height_return as i32,
        ))
    }

    /// Returns a windows name.
    #[must_use]
    pub fn get_window_name(&self, window: xlib::Window) -> Option<String> {
        if let Ok(text) = self.get_text_prop(window, self.atoms.NetWMName) {
            return Some(text);
        }
        if let Ok(text) = self.get_text_prop(window, xlib::XA_WM_NAME) {
            return Some(text);
        }
        None
    }

    /// Returns the states of a window.
    #[must_use]
    pub fn get_window_states(&self, window: xlib::Window) -> Vec<WindowState> {
        let window_states_atoms = self.get_window_states_atoms(window);

        // if window is maximized both horizontally and vertically
        // `WindowState::Maximized` is used
        // instead of `WindowState::MaximizedVert` and `WindowState::MaximizedHorz`
        let maximized = window_states_atoms.contains(&self.atoms.NetWMStateMaximizedVert)
            && window_states_atoms.contains(&self.atoms.NetWMStateMaximizedHorz);

        let mut window_states: Vec<WindowState> = window_states_atoms
            .iter()
            .filter_map(|a| match a {
                x if x == &self.atoms.NetWMStateModal => Some(WindowState::Modal),
                x if x == &self.atoms.NetWMStateSticky => Some(WindowState::Sticky),
                x if x == &self.atoms.NetWMStateMaximizedVert && !maximized => {
                    Some(WindowState::MaximizedVert)
                }
                x if x == &self.atoms.NetWMStateMaximizedHorz && !maximized => {
                    Some(WindowState::MaximizedHorz)
                }
                x if x == &self.atoms.NetWMStateShaded => Some(WindowState::Shaded),
                x if x == &self.atoms.NetWMStateSkipTaskbar => Some(WindowState::SkipTaskbar),
                x if x == &self.atoms.NetWMStateSkipPager => Some(WindowState::SkipPager),
                x if x == &self.atoms.NetWMStateHidden => Some(WindowState::Hidden),
                x if x == &self.atoms.NetWMStateFullscreen => Some(WindowState::Fullscreen),
                x if x == &self.atoms.NetWMStateAbove => Some(WindowState::Above),
                x if x == &self.atoms.NetWMStateBelow => Some(WindowState::Below),
                _ => None,
            })
            .collect();

        if maximized {
            window_states.push(WindowState::Maximized);
        }
        // Iconified windows without `_NET_WM_STATE_HIDDEN` still count as minimized.
        if !window_states.contains(&WindowState::Hidden)
            && self.get_wm_state(window) == Some(ICONIC_STATE)
        {
            window_states.push(WindowState::Hidden);
        }

        window_states
    }

    /// Returns the atom states of a window.
    #[must_use]
    pub fn get_window_states_atoms(&self, window: xlib::Window) -> Vec<xlib::Atom> {
        self.get_property_values(window, self.atoms.NetWMState, xlib::XA_ATOM)
            .unwrap_or_default()
    }

    /// Returns the type of a window.
    #[must_use]
    pub fn get_window_type(&self, window: xlib::Window) -> WindowType {
        let Some(atom) = self
            .get_property_values(window, self.atoms.NetWMWindowType, xlib::XA_ATOM)
            .ok()
            .and_then(|atoms| atoms.first().copied())
        else {
            return WindowType::Normal;
        };
        match atom {
            x if x == self.atoms.NetWMWindowTypeDesktop => WindowType::Desktop,
            x if x == self.atoms.NetWMWindowTypeDock => WindowType::Dock,
            x if x == self.atoms.NetWMWindowTypeToolbar => WindowType::Toolbar,
            x if x == self.atoms.NetWMWindowTypeMenu => WindowType::Menu,
            x if x == self.atoms.NetWMWindowTypeUtility => WindowType::Utility,
            x if x == self.atoms.NetWMWindowTypeSplash => WindowType::Splash,
            x if x == self.atoms.NetWMWindowTypeDialog => WindowType::Dialog,
            _ => WindowType::Normal,
        }
    }

    /// Returns the `WM_STATE` of a window.
    #[must_use]
    pub fn get_wm_state(&self, window: xlib::Window) -> Option<c_long> {
        self.get_property_values(window, self.atoms.WMState, self.atoms.WMState)
            .ok()?
            .first()
            .map(|&state| state as c_long)
    }

    // Internal functions.

    fn get_cardinal(&self, window: xlib::Window, property: xlib::Atom) -> Option<c_ulong> {
        self.get_property_values(window, property, xlib::XA_CARDINAL)
            .ok()?
            .first()
            .copied()
    }

    /// Whether a window carries a property at all.
    // `XListProperties`: https://tronche.com/gui/x/xlib/window-information/XListProperties.html
    fn has_property(&self, window: xlib::Window, property: xlib::Atom) -> bool {
        unsafe {
            let mut count: c_int = 0;
            let atoms = (self.xlib.XListProperties)(self.display, window, &mut count);
            if atoms.is_null() {
                return false;
            }
            let found = slice::from_raw_parts(atoms, count as usize).contains(&property);
            (self.xlib.XFree)(atoms.cast());
            found
        }
    }

    /// Returns a format 32 property of a window. Missing properties come back empty.
    ///
    /// # Errors
    ///
    /// Errors if the request fails.
    // `XGetWindowProperty`: https://tronche.com/gui/x/xlib/window-information/XGetWindowProperty.html
    fn get_property_values(
        &self,
        window: xlib::Window,
        property: xlib::Atom,
        r#type: xlib::Atom,
    ) -> Result<Vec<c_ulong>> {
        let mut format_return: i32 = 0;
        let mut nitems_return: c_ulong = 0;
        let mut type_return: xlib::Atom = 0;
        let mut bytes_after_return: c_ulong = 0;
        let mut prop_return: *mut c_uchar = std::ptr::null_mut();
        unsafe {
            let status = (self.xlib.XGetWindowProperty)(
                self.display,
                window,
                property,
                0,
                MAX_PROPERTY_VALUE_LEN / 4,
                xlib::False,
                r#type,
                &mut type_return,
                &mut format_return,
                &mut nitems_return,
                &mut bytes_after_return,
                &mut prop_return,
            );
            if status != i32::from(xlib::Success) {
                return Err(XlibError::FailedStatus);
            }
            if prop_return.is_null() {
                return Ok(vec![]);
            }
            // Xlib hands format 32 data back as an array of longs.
            let values = if format_return == 32 {
                slice::from_raw_parts(prop_return.cast::<c_ulong>(), nitems_return as usize)
                    .to_vec()
            } else {
                vec![]
            };
            (self.xlib.XFree)(prop_return.cast());
            Ok(values)
        }
    }

    /// Returns a text property for a window.
    /// # Errors
    ///
    /// Errors if window status = 0.
    // `XGetTextProperty`: https://tronche.com/gui/x/xlib/ICC/client-to-window-manager/XGetTextProperty.html
    fn get_text_prop(&self, window: xlib::Window, atom: xlib::Atom) -> Result<String> {
        unsafe {
            let mut text_prop: xlib::XTextProperty = std::mem::zeroed();
            let status: c_int =
                (self.xlib.XGetTextProperty)(self.display, window, &mut text_prop, atom);
            if status == 0 || text_prop.value.is_null() {
                return Err(XlibError::FailedStatus);
            }
            let text = CStr::from_ptr(text_prop.value.cast::<c_char>())
                .to_string_lossy()
                .into_owned();
            (self.xlib.XFree)(text_prop.value.cast());
            Ok(text)
        }
    }
}
