use crate::layouts::LayoutOptions;

/// Settings the layout engine reads. Implemented by the binary's config file.
pub trait Config {
    /// Layout applied when none is named explicitly.
    fn default_layout(&self) -> String;

    /// Consider windows on every workspace instead of only the current one.
    fn all_workspaces(&self) -> bool;

    fn expand_respects_struts(&self) -> bool;

    fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            expand_respects_struts: self.expand_respects_struts(),
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct TestConfig {
    pub all_workspaces: bool,
    pub expand_respects_struts: bool,
}

#[cfg(test)]
impl Config for TestConfig {
    fn default_layout(&self) -> String {
        crate::layouts::EXPAND.to_owned()
    }
    fn all_workspaces(&self) -> bool {
        self.all_workspaces
    }
    fn expand_respects_struts(&self) -> bool {
        self.expand_respects_struts
    }
}
