//! Objects (such as windows) the layouts work with.
mod bounds;
mod screen;
mod window;
mod window_state;
mod window_type;
mod xyhw;

pub use bounds::Bounds;
pub use screen::Screen;
pub use window::Handle;
#[cfg(test)]
pub(crate) use window::MockHandle;
pub use window::Window;
pub use window::WindowHandle;
pub use window_state::WindowState;
pub use window_type::WindowType;
pub use xyhw::Xyhw;
pub use xyhw::XyhwBuilder;

pub type WorkspaceId = usize;
