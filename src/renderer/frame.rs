//! Per-frame draw list
//!
//! The simulation never touches pixels. Each frame it is reduced to a list
//! of sprite kinds at world-space rects, the camera offset and HUD values,
//! and a renderer decides how to show them.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{LOW_TIME_WARNING, TILE_SIZE};
use crate::sim::{GameState, Rect};

/// Symbolic sprite kinds; asset lookup is up to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    Floor,
    Wall,
    Player,
    Exit,
    Enemy,
}

/// A sprite at a world-space rect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawItem {
    pub kind: SpriteKind,
    pub rect: Rect,
}

/// Heads-up display values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    /// Whole seconds left (0 once the game is over)
    pub time_remaining: i64,
    pub level: u32,
    pub active: bool,
    /// Time is running low; draw the timer in the warning style
    pub low_time: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub viewport: IVec2,
    /// Added to item rects to get screen positions
    pub camera_offset: IVec2,
    /// Back to front
    pub items: Vec<DrawItem>,
    pub hud: Hud,
}

/// Reduce the game state to a draw list.
///
/// A floor tile goes under every grid cell, then the player, exit, enemies
/// and walls on top. Items entirely outside the viewport are dropped.
pub fn build_frame(state: &GameState) -> Frame {
    let level = &state.level_state;
    let camera = &level.camera;
    let mut items = Vec::new();

    let mut push = |kind: SpriteKind, rect: &Rect| {
        if camera.is_visible(&camera.apply(rect)) {
            items.push(DrawItem { kind, rect: *rect });
        }
    };

    for y in 0..level.maze.height() as i32 {
        for x in 0..level.maze.width() as i32 {
            push(
                SpriteKind::Floor,
                &Rect::tile(IVec2::new(x, y) * TILE_SIZE, TILE_SIZE),
            );
        }
    }

    push(SpriteKind::Player, &level.player.rect);
    if let Some(exit) = &level.exit {
        push(SpriteKind::Exit, exit);
    }
    for enemy in &level.enemies {
        push(SpriteKind::Enemy, &enemy.rect);
    }
    for wall in &level.walls {
        push(SpriteKind::Wall, wall);
    }

    Frame {
        viewport: camera.viewport,
        camera_offset: camera.offset,
        items,
        hud: hud(state),
    }
}

fn hud(state: &GameState) -> Hud {
    let active = state.is_active();
    let remaining = state.level_state.time_remaining();
    Hud {
        time_remaining: if active { remaining.floor().max(0.0) as i64 } else { 0 },
        level: state.level,
        active,
        low_time: !active || remaining <= LOW_TIME_WARNING,
    }
}

impl Frame {
    /// Where an item lands on screen
    pub fn screen_rect(&self, item: &DrawItem) -> Rect {
        item.rect.translate(self.camera_offset)
    }

    /// Items of one kind, in draw order
    #[cfg(test)]
    pub fn of_kind(&self, kind: SpriteKind) -> impl Iterator<Item = &DrawItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }
}
