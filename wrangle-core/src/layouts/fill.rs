use super::{LayoutContext, FILL};
use crate::bounds::calc_bounds;
use crate::errors::{Result, WrangleError};
use crate::models::{Handle, Xyhw};

/// Layout which gives the active window all of the screen that panels and docks leave free.
///
/// # Errors
///
/// Fails when there is no active window.
pub fn fill<H: Handle>(ctx: &LayoutContext<'_, H>) -> Result<Xyhw> {
    if ctx.active.is_none() {
        return Err(WrangleError::execution(FILL, "there is no active window"));
    }
    let target = Xyhw::from(calc_bounds(ctx.screen, ctx.struts));
    tracing::debug!("Filling window to {}", target);
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::LayoutOptions;
    use crate::models::{MockHandle, Screen, Window, WindowType};

    #[test]
    fn should_fill_the_space_between_panels() {
        let screen = Screen::new(1920, 1080);
        let active = Window::new_test(1, Xyhw::new(100, 100, 200, 200));
        let neighbour = Window::new_test(2, Xyhw::new(400, 100, 200, 200));
        let mut top = Window::new_test(3, Xyhw::new(0, 0, 1920, 30));
        top.r#type = WindowType::Dock;
        let mut left = Window::new_test(4, Xyhw::new(0, 30, 64, 1050));
        left.r#type = WindowType::Dock;

        let result = fill(&LayoutContext {
            screen: &screen,
            windows: &[&active, &neighbour],
            struts: &[&top, &left],
            active: Some(&active),
            options: LayoutOptions::default(),
        });
        assert_eq!(result.unwrap(), Xyhw::new(64, 30, 1856, 1050));
    }

    #[test]
    fn should_fail_without_an_active_window() {
        let screen = Screen::default();
        let result = fill::<MockHandle>(&LayoutContext {
            screen: &screen,
            windows: &[],
            struts: &[],
            active: None,
            options: LayoutOptions::default(),
        });
        assert!(matches!(result, Err(WrangleError::LayoutExecution { .. })));
    }

    #[test]
    fn overlapping_panels_leave_an_empty_area() {
        let screen = Screen::new(1920, 1080);
        let active = Window::new_test(1, Xyhw::new(100, 100, 200, 200));
        let mut left = Window::new_test(2, Xyhw::new(0, 0, 1000, 1080));
        left.r#type = WindowType::Dock;
        let mut right = Window::new_test(3, Xyhw::new(900, 0, 1020, 1080));
        right.r#type = WindowType::Dock;

        let result = fill(&LayoutContext {
            screen: &screen,
            windows: &[&active],
            struts: &[&left, &right],
            active: Some(&active),
            options: LayoutOptions::default(),
        })
        .unwrap();
        assert_eq!(result, Xyhw::new(1000, 0, 0, 1080));
    }
}
