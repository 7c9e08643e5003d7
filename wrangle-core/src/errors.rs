use crate::models::Xyhw;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WrangleError>;

#[derive(Debug, Error)]
pub enum WrangleError {
    #[error("No such layout: '{0}'. Try running with --layouts to list possible layouts")]
    LayoutNotFound(String),
    #[error("Failed to apply layout '{layout}': {reason}")]
    LayoutExecution { layout: String, reason: String },
    /// A strut which is not flush with any screen edge. Only ever reported as a warning.
    #[error("Desktop layout contains floating element at {0}")]
    UnsupportedStrutGeometry(Xyhw),
    #[error("Display server error: {0}")]
    Display(String),
}

impl WrangleError {
    pub(crate) fn execution(layout: &str, reason: impl Into<String>) -> Self {
        Self::LayoutExecution {
            layout: layout.to_owned(),
            reason: reason.into(),
        }
    }
}
