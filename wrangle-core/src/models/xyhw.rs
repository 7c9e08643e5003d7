//! Window and screen geometry.
use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis aligned rectangle in screen pixels. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Copy)]
pub struct Xyhw {
    x: i32,
    y: i32,
    h: i32,
    w: i32,
}

/// Modifiable struct that can be used to generate an Xyhw struct. x,y from top left.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Copy)]
pub struct XyhwBuilder {
    pub x: i32,
    pub y: i32,
    pub h: i32,
    pub w: i32,
}

impl From<XyhwBuilder> for Xyhw {
    fn from(xywh: XyhwBuilder) -> Self {
        Self {
            x: xywh.x,
            y: xywh.y,
            w: xywh.w,
            h: xywh.h,
        }
    }
}

impl fmt::Display for Xyhw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})@{}x{}", self.x, self.y, self.w, self.h)
    }
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, h, w }
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }
    #[must_use]
    pub const fn h(&self) -> i32 {
        self.h
    }
    #[must_use]
    pub const fn w(&self) -> i32 {
        self.w
    }

    /// The x coordinate just past the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// The y coordinate just past the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn set_x(&mut self, value: i32) {
        self.x = value;
    }
    pub fn set_y(&mut self, value: i32) {
        self.y = value;
    }
    pub fn set_h(&mut self, value: i32) {
        self.h = value;
    }
    pub fn set_w(&mut self, value: i32) {
        self.w = value;
    }

    /// Higher than it is wide.
    #[must_use]
    pub const fn is_tall(&self) -> bool {
        self.h > self.w
    }

    /// Wider than it is high.
    #[must_use]
    pub const fn is_broad(&self) -> bool {
        self.w > self.h
    }

    /// `self` ends strictly before `other` starts on the x axis.
    #[must_use]
    pub const fn is_left_of(&self, other: &Self) -> bool {
        self.right() < other.x
    }

    /// `self` starts strictly after `other` ends on the x axis.
    #[must_use]
    pub const fn is_right_of(&self, other: &Self) -> bool {
        self.x > other.right()
    }

    /// `self` ends strictly before `other` starts on the y axis.
    #[must_use]
    pub const fn is_above(&self, other: &Self) -> bool {
        self.bottom() < other.y
    }

    /// `self` starts strictly after `other` ends on the y axis.
    #[must_use]
    pub const fn is_below(&self, other: &Self) -> bool {
        self.y > other.bottom()
    }

    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        let max_x = self.x + self.w;
        let max_y = self.y + self.h;
        (self.x <= x && x <= max_x) && (self.y <= y && y <= max_y)
    }

    pub const fn contains_xyhw(&self, other: &Self) -> bool {
        let other_max_x = other.x + other.w;
        let other_max_y = other.y + other.h;
        self.contains_point(other.x, other.y) && self.contains_point(other_max_x, other_max_y)
    }

    /// Whether the two rectangles share any area. Touching edges do not count.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_and_bottom_are_exclusive_edges() {
        let a = Xyhw::new(10, 20, 100, 50);
        assert_eq!(a.right(), 110);
        assert_eq!(a.bottom(), 70);
    }

    #[test]
    fn orientation_of_a_square_is_neither_tall_nor_broad() {
        let square = Xyhw::new(0, 0, 40, 40);
        assert!(!square.is_tall());
        assert!(!square.is_broad());
        assert!(Xyhw::new(0, 0, 30, 1080).is_tall());
        assert!(Xyhw::new(0, 0, 1920, 30).is_broad());
    }

    #[test]
    fn edge_comparisons_are_strict() {
        let a = Xyhw::new(0, 0, 100, 100);
        let touching = Xyhw::new(100, 100, 100, 100);
        assert!(!a.is_left_of(&touching));
        assert!(!touching.is_right_of(&a));
        assert!(!a.is_above(&touching));
        assert!(!touching.is_below(&a));

        let apart = Xyhw::new(101, 101, 100, 100);
        assert!(a.is_left_of(&apart));
        assert!(apart.is_right_of(&a));
        assert!(a.is_above(&apart));
        assert!(apart.is_below(&a));
    }

    #[test]
    fn intersects_ignores_shared_edges() {
        let a = Xyhw::new(0, 0, 100, 100);
        assert!(!a.intersects(&Xyhw::new(100, 0, 50, 50)));
        assert!(a.intersects(&Xyhw::new(99, 99, 50, 50)));
        assert!(!a.intersects(&Xyhw::new(0, 200, 50, 50)));
    }

    #[test]
    fn contains_xyhw_should_detect_a_inner_window() {
        let a = Xyhw::new(0, 0, 1000, 1000);
        let b = Xyhw::new(100, 100, 800, 800);
        assert!(a.contains_xyhw(&b));
    }

    #[test]
    fn contains_xyhw_should_detect_a_lower_right_corner_outside() {
        let a = Xyhw::new(100, 100, 800, 800);
        let b = Xyhw::new(800, 800, 200, 200);
        assert!(!a.contains_xyhw(&b));
    }

    #[test]
    fn builder_converts_field_for_field() {
        let built: Xyhw = XyhwBuilder {
            x: 1,
            y: 2,
            w: 3,
            h: 4,
        }
        .into();
        assert_eq!(built, Xyhw::new(1, 2, 3, 4));
        assert_eq!(built.to_string(), "(1, 2)@3x4");
    }
}
