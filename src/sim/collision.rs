//! Axis-separated motion against static walls
//!
//! The horizontal delta is applied and resolved first, then the vertical
//! delta from the (possibly clamped) position. Resolving one axis at a time
//! keeps boxes from slipping diagonally through wall corners. Per-tick speed
//! is well under a tile, so a box can only sink into walls it touches.

use super::rect::Rect;

/// Move `rect` by (`dx`, `dy`), pushing it flush out of any wall it enters.
///
/// Every wall is tested on each axis; if several overlap, the last one in
/// iteration order decides the final edge.
pub fn move_and_collide(rect: &mut Rect, dx: i32, dy: i32, walls: &[Rect]) {
    if dx != 0 {
        rect.x += dx;
        for wall in walls {
            if rect.overlaps(wall) {
                if dx > 0 {
                    rect.set_right(wall.left());
                } else {
                    rect.set_left(wall.right());
                }
            }
        }
    }

    if dy != 0 {
        rect.y += dy;
        for wall in walls {
            if rect.overlaps(wall) {
                if dy > 0 {
                    rect.set_bottom(wall.top());
                } else {
                    rect.set_top(wall.bottom());
                }
            }
        }
    }
}
