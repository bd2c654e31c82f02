//! Viewport-following camera

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Translation from world to screen space, recomputed from the target each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    /// Added to world positions to get screen positions (never positive
    /// unless the world is smaller than the viewport)
    pub offset: IVec2,
    /// Viewport size in world units
    pub viewport: IVec2,
    /// World size in world units
    pub world: IVec2,
}

impl Camera {
    pub fn new(viewport: IVec2, world: IVec2) -> Self {
        Self {
            offset: IVec2::ZERO,
            viewport,
            world,
        }
    }

    /// Center the view on `target`, clamped so no space beyond the world
    /// edges shows. The upper bound (0) is applied before the lower bound,
    /// so a world narrower than the viewport pins to `viewport - world`.
    pub fn update(&mut self, target: &Rect) {
        let centered = self.viewport / 2 - target.center();
        let floor = -(self.world - self.viewport);
        self.offset = centered.min(IVec2::ZERO).max(floor);
    }

    /// Screen-space copy of a world rect
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.translate(self.offset)
    }

    /// Whether a screen-space rect is at least partly on screen
    pub fn is_visible(&self, screen_rect: &Rect) -> bool {
        screen_rect.overlaps(&Rect::new(0, 0, self.viewport.x, self.viewport.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new(IVec2::new(640, 480), IVec2::new(1600, 1200))
    }

    #[test]
    fn test_target_at_origin_clamps_to_zero() {
        let mut cam = camera();
        cam.update(&Rect::new(0, 0, 32, 32));
        assert_eq!(cam.offset, IVec2::ZERO);
    }

    #[test]
    fn test_centers_target_in_open_world() {
        let mut cam = camera();
        let target = Rect::new(784, 584, 32, 32);
        cam.update(&target);
        assert_eq!(cam.offset, IVec2::new(320 - 800, 240 - 600));
        assert_eq!(cam.apply(&target).center(), IVec2::new(320, 240));
    }

    #[test]
    fn test_clamps_at_far_edge() {
        let mut cam = camera();
        cam.update(&Rect::new(1568, 1168, 32, 32));
        assert_eq!(cam.offset, IVec2::new(-(1600 - 640), -(1200 - 480)));
    }

    #[test]
    fn test_world_smaller_than_viewport() {
        // Upper clamp first, then the (positive) lower bound wins
        let mut cam = Camera::new(IVec2::new(640, 480), IVec2::new(480, 480));
        cam.update(&Rect::new(0, 0, 32, 32));
        assert_eq!(cam.offset, IVec2::new(160, 0));
        cam.update(&Rect::new(448, 448, 32, 32));
        assert_eq!(cam.offset, IVec2::new(160, 0));
    }

    #[test]
    fn test_visibility() {
        let cam = camera();
        assert!(cam.is_visible(&Rect::new(-16, -16, 32, 32)));
        assert!(!cam.is_visible(&Rect::new(-32, 0, 32, 32)));
        assert!(!cam.is_visible(&Rect::new(640, 100, 32, 32)));
    }
}
