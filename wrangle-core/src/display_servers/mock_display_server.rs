use super::DisplayServer;
use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::{Handle, Screen, Window, WindowHandle, WorkspaceId};

/// In-memory desktop which records the actions it is asked to execute.
#[derive(Clone, Debug)]
pub struct MockDisplayServer<H: Handle> {
    pub screen: Screen,
    pub windows: Vec<Window<H>>,
    pub active: Option<WindowHandle<H>>,
    pub workspace: Option<WorkspaceId>,
    pub actions: Vec<DisplayAction<H>>,
}

impl<H: Handle> MockDisplayServer<H> {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            windows: vec![],
            active: None,
            workspace: None,
            actions: vec![],
        }
    }
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn screen(&self) -> Result<Screen> {
        Ok(self.screen)
    }

    fn windows(&self) -> Result<Vec<Window<H>>> {
        Ok(self.windows.clone())
    }

    fn active_window(&self) -> Option<WindowHandle<H>> {
        self.active
    }

    fn current_workspace(&self) -> Option<WorkspaceId> {
        self.workspace
    }

    fn execute_action(&mut self, act: DisplayAction<H>) -> Result<()> {
        self.actions.push(act);
        Ok(())
    }
}
