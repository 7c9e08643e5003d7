#[cfg(test)]
mod mock_display_server;

use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::{Handle, Screen, Window, WindowHandle, WorkspaceId};

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// What wrangle needs from the desktop: a way to look at the windows and a way to move one.
pub trait DisplayServer<H: Handle> {
    /// # Errors
    ///
    /// Fails when the screen size cannot be read.
    fn screen(&self) -> Result<Screen>;

    /// All windows the window manager knows about.
    ///
    /// # Errors
    ///
    /// Fails when the window list cannot be read.
    fn windows(&self) -> Result<Vec<Window<H>>>;

    fn active_window(&self) -> Option<WindowHandle<H>>;

    /// `None` when the window manager has no notion of workspaces.
    fn current_workspace(&self) -> Option<WorkspaceId>;

    /// # Errors
    ///
    /// Fails when the request could not be sent.
    fn execute_action(&mut self, act: DisplayAction<H>) -> Result<()>;

    fn flush(&self) {}
}
