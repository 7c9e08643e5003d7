use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum WindowState {
    Modal,
    Sticky,
    MaximizedVert,
    MaximizedHorz,
    Maximized,
    Shaded,
    SkipTaskbar,
    SkipPager,
    /// Minimized (iconified).
    Hidden,
    Fullscreen,
    Above,
    Below,
}
