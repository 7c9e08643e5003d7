use super::{LayoutContext, EXPAND};
use crate::bounds::calc_bounds;
use crate::errors::{Result, WrangleError};
use crate::models::{Bounds, Handle, Xyhw};
use std::cmp;

/// Layout which grows the active window in all directions without it overlapping any window
/// it doesn't already overlap.
///
/// Struts are not subtracted unless [`super::LayoutOptions::expand_respects_struts`] is set;
/// the window manager keeps windows off the panels.
///
/// # Errors
///
/// Fails when there is no active window.
pub fn expand<H: Handle>(ctx: &LayoutContext<'_, H>) -> Result<Xyhw> {
    let active = ctx
        .active
        .ok_or_else(|| WrangleError::execution(EXPAND, "there is no active window"))?;
    let a = active.geometry();

    let mut bounds = if ctx.options.expand_respects_struts {
        calc_bounds(ctx.screen, ctx.struts)
    } else {
        Bounds::of_screen(ctx.screen)
    };

    for window in ctx.windows.iter().filter(|w| w.handle != active.handle) {
        let other = window.geometry();

        if other.is_left_of(&a) {
            bounds.left = cmp::max(bounds.left, other.right());
        }
        if other.is_right_of(&a) {
            bounds.right = cmp::min(bounds.right, other.x());
        }
        if other.is_above(&a) {
            bounds.top = cmp::max(bounds.top, other.bottom());
        }
        if other.is_below(&a) {
            bounds.bottom = cmp::min(bounds.bottom, other.y());
        }
    }

    let target = Xyhw::from(bounds);
    tracing::debug!("Expanding window to {}", target);
    Ok(target)
}
