use crate::config::Config;
use crate::display_action::{DisplayAction, Gravity, MoveResizeFlags};
use crate::display_servers::DisplayServer;
use crate::errors::{Result, WrangleError};
use crate::filters;
use crate::layouts::{LayoutContext, LayoutOptions, LayoutRegistry};
use crate::models::{Handle, WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};

/// Where a layout wants a window to go.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrangement<H: Handle> {
    #[serde(bound = "")]
    pub window: WindowHandle<H>,
    pub geometry: Xyhw,
}

/// Applies layouts from a [`LayoutRegistry`] to whatever a [`DisplayServer`] shows.
#[derive(Debug)]
pub struct Wrangler<'r, H: Handle, SERVER> {
    pub display_server: SERVER,
    layouts: &'r LayoutRegistry<H>,
    options: LayoutOptions,
    all_workspaces: bool,
}

impl<'r, H, SERVER> Wrangler<'r, H, SERVER>
where
    H: Handle,
    SERVER: DisplayServer<H>,
{
    pub fn new(display_server: SERVER, layouts: &'r LayoutRegistry<H>, config: &impl Config) -> Self {
        Self {
            display_server,
            layouts,
            options: config.layout_options(),
            all_workspaces: config.all_workspaces(),
        }
    }

    /// Work out where the named layout puts the active window, without moving it.
    ///
    /// # Errors
    ///
    /// [`WrangleError::LayoutNotFound`] if no layout is called `name`, otherwise whatever the
    /// display server or the layout fail with.
    pub fn arrange(&self, name: &str) -> Result<Arrangement<H>> {
        let layout = self
            .layouts
            .get(name)
            .ok_or_else(|| WrangleError::LayoutNotFound(name.to_owned()))?;

        let screen = self.display_server.screen()?;
        let all = self.display_server.windows()?;
        let workspace = if self.all_workspaces {
            None
        } else {
            self.display_server.current_workspace()
        };
        let windows = filters::user_windows(&all, workspace);
        let struts = filters::strut_windows(&all, workspace);
        let active = self
            .display_server
            .active_window()
            .and_then(|handle| all.iter().find(|w| w.handle == handle));
        tracing::debug!(
            "Applying {} to {} windows, {} struts, workspace {:?}, active {:?}",
            layout.name,
            windows.len(),
            struts.len(),
            workspace,
            active.map(|w| w.handle)
        );

        let ctx = LayoutContext {
            screen: &screen,
            windows: &windows,
            struts: &struts,
            active,
            options: self.options,
        };
        let geometry = (layout.handler)(&ctx)?;
        let window = active
            .ok_or_else(|| WrangleError::execution(name, "there is no active window"))?
            .handle;
        Ok(Arrangement { window, geometry })
    }

    /// Apply the named layout to the active window.
    ///
    /// Nothing is moved unless the layout succeeds; on success exactly one move/resize is sent.
    ///
    /// # Errors
    ///
    /// See [`Self::arrange`]. Also fails if the display server rejects the move.
    pub fn apply_layout_by_name(&mut self, name: &str) -> Result<Arrangement<H>> {
        let arrangement = self.arrange(name)?;
        self.display_server.execute_action(DisplayAction::MoveResize {
            window: arrangement.window,
            gravity: Gravity::Static,
            flags: MoveResizeFlags::MOVE | MoveResizeFlags::RESIZE,
            geometry: arrangement.geometry,
        })?;
        self.display_server.flush();
        Ok(arrangement)
    }
}
