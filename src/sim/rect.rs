//! Integer axis-aligned rectangles in world space
//!
//! Every entity in the maze (walls, exit, player, enemies) is an AABB on the
//! integer pixel lattice, so motion and collision stay exact.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Square rect covering one tile at a world position
    pub const fn tile(pos: IVec2, size: i32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    #[inline]
    pub fn top_left(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Center point, rounded toward the top-left for odd sizes
    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Move the rect so its center lands on `center`
    pub fn set_center(&mut self, center: IVec2) {
        self.x = center.x - self.w / 2;
        self.y = center.y - self.h / 2;
    }

    /// Grow (or shrink, for negative deltas) the rect around its center
    pub fn inflate(&self, dw: i32, dh: i32) -> Self {
        Self {
            x: self.x - dw / 2,
            y: self.y - dh / 2,
            w: self.w + dw,
            h: self.h + dh,
        }
    }

    /// Copy of the rect shifted by `offset`
    pub fn translate(&self, offset: IVec2) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    /// Strict overlap test. Rects that only share an edge do not overlap,
    /// which is what lets a box rest flush against a wall.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_setters() {
        let mut r = Rect::new(10, 20, 30, 40);
        assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (10, 40, 20, 60));

        r.set_right(100);
        assert_eq!(r.x, 70);
        r.set_bottom(100);
        assert_eq!(r.y, 60);
        r.set_left(0);
        r.set_top(0);
        assert_eq!(r.top_left(), IVec2::ZERO);
    }

    #[test]
    fn test_inflate_keeps_center() {
        let visual = Rect::new(64, 32, 32, 32);
        let hitbox = visual.inflate(-12, -12);
        assert_eq!(hitbox, Rect::new(70, 38, 20, 20));
        assert_eq!(hitbox.center(), visual.center());
    }

    #[test]
    fn test_set_center() {
        let mut r = Rect::new(0, 0, 20, 20);
        r.set_center(IVec2::new(48, 48));
        assert_eq!(r.top_left(), IVec2::new(38, 38));
        assert_eq!(r.center(), IVec2::new(48, 48));
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0, 0, 32, 32);
        let touching = Rect::new(32, 0, 32, 32);
        let overlapping = Rect::new(31, 31, 32, 32);
        let apart = Rect::new(100, 100, 5, 5);

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&overlapping));
        assert!(overlapping.overlaps(&a));
        assert!(!a.overlaps(&apart));
    }

    #[test]
    fn test_translate() {
        let r = Rect::new(5, 5, 10, 10).translate(IVec2::new(-5, 3));
        assert_eq!(r, Rect::new(0, 8, 10, 10));
    }
}
