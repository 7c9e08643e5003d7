//! `XWrap` setters.
use super::{Result, XWrap, XlibError};
use std::os::raw::c_long;
use wrangle_core::models::Xyhw;
use wrangle_core::{Gravity, MoveResizeFlags};
use x11_dl::xlib;

/// Source indication for requests from pagers and other tools acting for the user.
const SOURCE_PAGER: c_long = 2;

impl XWrap {
    // Public functions.

    /// Asks the window manager to move and/or resize a window.
    ///
    /// # Errors
    ///
    /// Errors if the request could not be sent.
    // `_NET_MOVERESIZE_WINDOW`: https://specifications.freedesktop.org/wm-spec/1.5/ar01s04.html
    pub fn move_resize_window(
        &self,
        window: xlib::Window,
        gravity: Gravity,
        flags: MoveResizeFlags,
        geometry: Xyhw,
    ) -> Result<()> {
        let mut msg: xlib::XClientMessageEvent = unsafe { std::mem::zeroed() };
        msg.type_ = xlib::ClientMessage;
        msg.window = window;
        msg.message_type = self.atoms.NetMoveResizeWindow;
        msg.format = 32;
        msg.data.set_long(0, moveresize_detail(gravity, flags));
        msg.data.set_long(1, c_long::from(geometry.x()));
        msg.data.set_long(2, c_long::from(geometry.y()));
        msg.data.set_long(3, c_long::from(geometry.w()));
        msg.data.set_long(4, c_long::from(geometry.h()));
        let mut ev: xlib::XEvent = msg.into();
        self.send_xevent(
            self.root,
            xlib::False,
            xlib::SubstructureRedirectMask | xlib::SubstructureNotifyMask,
            &mut ev,
        )
    }

    /// Send a xevent for a window to X.
    ///
    /// # Errors
    ///
    /// Errors if X could not convert the event.
    // `XSendEvent`: https://tronche.com/gui/x/xlib/event-handling/XSendEvent.html
    pub fn send_xevent(
        &self,
        window: xlib::Window,
        propogate: i32,
        mask: c_long,
        event: &mut xlib::XEvent,
    ) -> Result<()> {
        let status =
            unsafe { (self.xlib.XSendEvent)(self.display, window, propogate, mask, event) };
        self.sync();
        sent(status)
    }
}

/// `XSendEvent` returns zero when the event could not be converted to wire format.
pub(crate) fn sent(status: xlib::Status) -> Result<()> {
    if status == 0 {
        return Err(XlibError::FailedStatus);
    }
    Ok(())
}

/// Packs gravity, flags and source into the first data field of `_NET_MOVERESIZE_WINDOW`.
pub(crate) fn moveresize_detail(gravity: Gravity, flags: MoveResizeFlags) -> c_long {
    c_long::from(gravity as u8) | c_long::from(flags.bits()) << 8 | SOURCE_PAGER << 12
}
