//! Usable screen area left over by panels and docks.
use crate::errors::{Result, WrangleError};
use crate::models::{Bounds, Handle, Screen, Window, Xyhw};
use std::cmp;

/// The screen edge a strut reserves space along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrutEdge {
    Left,
    Top,
    Right,
    Bottom,
}

/// Work out which screen edge a strut is anchored to.
///
/// Tall struts can only sit on the left or right, broad ones on the top or bottom. The
/// first matching edge wins, checked in the order left, top, right, bottom.
///
/// # Errors
///
/// Returns [`WrangleError::UnsupportedStrutGeometry`] for floating struts, which are flush
/// with no screen edge (or square).
pub fn strut_edge(screen: &Screen, strut: &Xyhw) -> Result<StrutEdge> {
    if strut.is_tall() && strut.x() == 0 {
        Ok(StrutEdge::Left)
    } else if strut.is_broad() && strut.y() == 0 {
        Ok(StrutEdge::Top)
    } else if strut.is_tall() && strut.right() == screen.width {
        Ok(StrutEdge::Right)
    } else if strut.is_broad() && strut.bottom() == screen.height {
        Ok(StrutEdge::Bottom)
    } else {
        Err(WrangleError::UnsupportedStrutGeometry(*strut))
    }
}

/// Calculate the largest rectangle not covered by `struts`.
///
/// Assumes every strut sits along a screen edge and spans it, i.e. a standard panel setup.
/// Floating struts are logged and ignored.
pub fn calc_bounds<H: Handle>(screen: &Screen, struts: &[&Window<H>]) -> Bounds {
    let mut bounds = Bounds::of_screen(screen);

    for strut in struts {
        let geometry = strut.geometry();
        match strut_edge(screen, &geometry) {
            Ok(StrutEdge::Left) => bounds.left = cmp::max(bounds.left, geometry.right()),
            Ok(StrutEdge::Top) => bounds.top = cmp::max(bounds.top, geometry.bottom()),
            Ok(StrutEdge::Right) => bounds.right = cmp::min(bounds.right, geometry.x()),
            Ok(StrutEdge::Bottom) => bounds.bottom = cmp::min(bounds.bottom, geometry.y()),
            Err(err) => tracing::warn!("{}", err),
        }
    }

    tracing::debug!(
        "Calculated desktop bounds ({}, {}), ({}, {})",
        bounds.left,
        bounds.top,
        bounds.right,
        bounds.bottom
    );
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MockHandle, WindowType};

    const SCREEN: Screen = Screen::new(1920, 1080);

    fn strut(id: MockHandle, x: i32, y: i32, w: i32, h: i32) -> Window<MockHandle> {
        let mut window = Window::new_test(id, Xyhw::new(x, y, w, h));
        window.r#type = WindowType::Dock;
        window
    }

    fn bounds_of(struts: &[Window<MockHandle>]) -> Bounds {
        let refs: Vec<&Window<MockHandle>> = struts.iter().collect();
        calc_bounds(&SCREEN, &refs)
    }

    #[test]
    fn no_struts_leaves_the_whole_screen() {
        assert_eq!(bounds_of(&[]), Bounds::of_screen(&SCREEN));
    }

    #[test]
    fn a_top_panel_should_push_the_top_edge_down() {
        let bounds = bounds_of(&[strut(1, 0, 0, 1920, 30)]);
        assert_eq!(
            bounds,
            Bounds {
                left: 0,
                top: 30,
                right: 1920,
                bottom: 1080
            }
        );
    }

    #[test]
    fn struts_on_every_edge() {
        let bounds = bounds_of(&[
            strut(1, 0, 0, 48, 1080),
            strut(2, 0, 0, 1920, 24),
            strut(3, 1880, 0, 40, 1080),
            strut(4, 0, 1050, 1920, 30),
        ]);
        assert_eq!(
            bounds,
            Bounds {
                left: 48,
                top: 24,
                right: 1880,
                bottom: 1050
            }
        );
    }

    #[test]
    fn the_thickest_strut_on_an_edge_wins() {
        let bounds = bounds_of(&[strut(1, 0, 1050, 1920, 30), strut(2, 0, 1000, 1920, 80)]);
        assert_eq!(bounds.bottom, 1000);
    }

    #[test]
    fn floating_struts_are_ignored() {
        let floating = strut(1, 50, 40, 100, 20);
        assert!(matches!(
            strut_edge(&SCREEN, &floating.geometry()),
            Err(WrangleError::UnsupportedStrutGeometry(g)) if g == floating.geometry()
        ));
        assert_eq!(bounds_of(&[floating]), Bounds::of_screen(&SCREEN));
    }

    #[test]
    fn a_square_strut_is_floating() {
        let square = strut(1, 0, 0, 40, 40);
        assert!(strut_edge(&SCREEN, &square.geometry()).is_err());
        assert_eq!(bounds_of(&[square]), Bounds::of_screen(&SCREEN));
    }

    #[test]
    fn a_broad_strut_touching_the_top_counts_as_a_top_panel() {
        // Only the edge it touches matters, not whether it spans the edge.
        let partial = strut(1, 50, 0, 100, 20);
        assert_eq!(strut_edge(&SCREEN, &partial.geometry()).ok(), Some(StrutEdge::Top));
        assert_eq!(bounds_of(&[partial]).top, 20);
    }

    #[test]
    fn a_tall_strut_touching_the_top_is_not_a_top_panel() {
        let tall = strut(1, 500, 0, 20, 100);
        assert!(strut_edge(&SCREEN, &tall.geometry()).is_err());
    }

    #[test]
    fn strut_order_does_not_matter() {
        let struts = vec![
            strut(1, 0, 0, 48, 1080),
            strut(2, 0, 0, 1920, 24),
            strut(3, 1880, 0, 40, 1080),
            strut(4, 0, 1050, 1920, 30),
            strut(5, 300, 300, 10, 10),
            strut(6, 0, 0, 1920, 32),
        ];
        let expected = bounds_of(&struts);
        let mut reversed = struts.clone();
        reversed.reverse();
        assert_eq!(bounds_of(&reversed), expected);
        for i in 0..struts.len() {
            let mut rotated = struts.clone();
            rotated.rotate_left(i);
            assert_eq!(bounds_of(&rotated), expected);
        }
    }

    #[test]
    fn adding_a_strut_never_grows_the_bounds() {
        let candidates = vec![
            strut(1, 0, 0, 48, 1080),
            strut(2, 0, 0, 1920, 24),
            strut(3, 1880, 0, 40, 1080),
            strut(4, 0, 1050, 1920, 30),
            strut(5, 0, 0, 10, 1080),
            strut(6, 0, 1070, 1920, 10),
        ];
        let mut struts = vec![];
        let mut previous = bounds_of(&struts);
        for candidate in candidates {
            struts.push(candidate);
            let next = bounds_of(&struts);
            assert!(next.left >= previous.left);
            assert!(next.top >= previous.top);
            assert!(next.right <= previous.right);
            assert!(next.bottom <= previous.bottom);
            previous = next;
        }
    }
}
