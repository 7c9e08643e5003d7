//! A wrapper around calls to xlib and X related functions.
// We allow this because _y_ and _x_ are intentionally similar. Changing it makes the code noisy.
#![allow(clippy::similar_names)]
use super::xatom::XAtom;
use std::os::raw::{c_int, c_long, c_ulong};
use std::ptr;
use thiserror::Error;
use wrangle_core::WrangleError;

use x11_dl::xlib;

mod getters;
mod setters;

type WindowStateConst = c_long;
pub const ICONIC_STATE: WindowStateConst = 2;
const MAX_PROPERTY_VALUE_LEN: c_long = 4096;

// This is allowed for now as const extern fns
// are not yet stable (1.56.0, 16 Sept 2021)
// see issue #64926 <https://github.com/rust-lang/rust/issues/64926> for more information.
#[allow(clippy::missing_const_for_fn)]
pub extern "C" fn on_error_from_xlib(_: *mut xlib::Display, er: *mut xlib::XErrorEvent) -> c_int {
    let err = unsafe { *er };
    // Windows can go away between listing and querying them. Nothing here is fatal.
    tracing::debug!(
        "Ignoring X error {} from request {} on {:#x}",
        err.error_code,
        err.request_code,
        err.resourceid
    );
    0
}

pub type Result<T> = std::result::Result<T, XlibError>;

#[derive(Debug, Clone, Error)]
pub enum XlibError {
    #[error("Unable to load xlib: {0}")]
    LoadLibrary(String),
    #[error("Unable to open the X display, is DISPLAY set?")]
    DisplayNotFound,
    #[error("The window manager does not publish {0}")]
    MissingProperty(&'static str),
    #[error("An X request failed")]
    FailedStatus,
}

impl From<XlibError> for WrangleError {
    fn from(err: XlibError) -> Self {
        WrangleError::Display(err.to_string())
    }
}

/// Contains Xserver information and origins.
pub struct XWrap {
    xlib: xlib::Xlib,
    display: *mut xlib::Display,
    root: xlib::Window,
    pub atoms: XAtom,
}

impl XWrap {
    /// # Errors
    ///
    /// Fails if xlib cannot be loaded or the display cannot be opened.
    // `XOpenDisplay`: https://tronche.com/gui/x/xlib/display/opening.html
    // `XDefaultRootWindow`: https://tronche.com/gui/x/xlib/display/display-macros.html#DefaultRootWindow
    // `XSetErrorHandler`: https://tronche.com/gui/x/xlib/event-handling/protocol-errors/XSetErrorHandler.html
    pub fn new() -> Result<Self> {
        let xlib = xlib::Xlib::open().map_err(|err| XlibError::LoadLibrary(err.to_string()))?;
        let display = unsafe { (xlib.XOpenDisplay)(ptr::null()) };
        if display.is_null() {
            return Err(XlibError::DisplayNotFound);
        }
        let root = unsafe { (xlib.XDefaultRootWindow)(display) };
        let atoms = XAtom::new(&xlib, display);
        unsafe {
            (xlib.XSetErrorHandler)(Some(on_error_from_xlib));
        }
        tracing::debug!("Connected to X display, root window {:#x}", root);
        Ok(Self {
            xlib,
            display,
            root,
            atoms,
        })
    }

    /// Flush and sync the xserver.
    // `XSync`: https://tronche.com/gui/x/xlib/event-handling/XSync.html
    pub fn sync(&self) {
        unsafe { (self.xlib.XSync)(self.display, xlib::False) };
    }

    /// Flush the xserver.
    // `XFlush`: https://tronche.com/gui/x/xlib/event-handling/XFlush.html
    pub fn flush(&self) {
        unsafe { (self.xlib.XFlush)(self.display) };
    }
}

impl Drop for XWrap {
    // `XCloseDisplay`: https://tronche.com/gui/x/xlib/display/closing.html
    fn drop(&mut self) {
        self.sync();
        unsafe { (self.xlib.XCloseDisplay)(self.display) };
    }
}

/// Maps a `_NET_WM_DESKTOP` / `_NET_CURRENT_DESKTOP` cardinal to a workspace.
///
/// `0xFFFFFFFF` marks windows shown on every desktop.
pub(crate) fn desktop_from_cardinal(value: c_ulong) -> Option<usize> {
    match u32::try_from(value) {
        Ok(u32::MAX) | Err(_) => None,
        Ok(desktop) => Some(desktop as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_windows_have_no_desktop() {
        assert_eq!(desktop_from_cardinal(0xFFFF_FFFF), None);
        assert_eq!(desktop_from_cardinal(c_ulong::MAX), None);
    }

    #[test]
    fn desktops_are_counted_from_zero() {
        assert_eq!(desktop_from_cardinal(0), Some(0));
        assert_eq!(desktop_from_cardinal(3), Some(3));
    }
}
