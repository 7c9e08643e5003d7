//! Splitting the display server's window list into the windows a layout arranges and the
//! windows it has to work around.
use crate::models::{Handle, Window, WorkspaceId};

/// Windows the user controls and can see on `current_workspace`.
///
/// Skips anything minimized, maximized, shaded or hidden from the task list. With
/// `current_workspace` set, only windows in that workspace's viewport are kept, along with
/// windows that are on every workspace. Input order is preserved.
pub fn user_windows<H: Handle>(
    windows: &[Window<H>],
    current_workspace: Option<WorkspaceId>,
) -> Vec<&Window<H>> {
    windows
        .iter()
        .filter(|w| {
            !w.is_skip_taskbar() && !w.is_minimized() && !w.is_maximized() && !w.is_shaded()
        })
        .filter(|w| match current_workspace {
            None => true,
            Some(current) => w.is_pinned() || (w.workspace == Some(current) && w.in_viewport),
        })
        .collect()
}

/// Windows that are hard edges other windows should not cross, i.e. panels and docks.
///
/// Input order is preserved.
pub fn strut_windows<H: Handle>(
    windows: &[Window<H>],
    current_workspace: Option<WorkspaceId>,
) -> Vec<&Window<H>> {
    windows
        .iter()
        .filter(|w| w.is_dock())
        .filter(|w| match current_workspace {
            None => true,
            Some(current) => w.is_pinned() || w.workspace == Some(current),
        })
        .collect()
}
