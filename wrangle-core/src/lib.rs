//! Layout engine for `wrangle`.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
// Remember, the goal of wrangle is to do one thing and to do that one thing
// well: Put the active window where the layout says it belongs.
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
pub mod bounds;
pub mod config;
mod display_action;
pub mod display_servers;
pub mod errors;
pub mod filters;
pub mod layouts;
pub mod models;
mod wrangler;

pub use config::Config;
pub use display_action::{DisplayAction, Gravity, MoveResizeFlags};
pub use display_servers::DisplayServer;
pub use errors::{Result, WrangleError};
pub use layouts::{Layout, LayoutContext, LayoutOptions, LayoutRegistry};
pub use models::Window;
pub use wrangler::{Arrangement, Wrangler};
