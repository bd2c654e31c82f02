//! Endless Maze - A procedurally generated maze arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze generation, motion, collisions, game state)
//! - `renderer`: Abstract draw lists and the renderers that consume them
//! - `platform`: Input sampling, clocks and frame pacing
//! - `app`: The frame loop tying the collaborators to the simulation
//! - `settings`: Runtime configuration

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, RunSummary};
pub use error::{Error, Result};
pub use settings::{InputMode, RendererKind, Settings};

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Edge length of one maze tile in world units
    pub const TILE_SIZE: i32 = 32;

    /// Default viewport dimensions
    pub const VIEWPORT_WIDTH: i32 = 640;
    pub const VIEWPORT_HEIGHT: i32 = 480;

    /// Target frame rate of the loop
    pub const TARGET_FPS: u32 = 60;

    /// Player displacement per tick on each pressed axis
    pub const PLAYER_SPEED: i32 = 4;
    /// Total shrink of the player hitbox relative to its visual rect (per axis)
    pub const PLAYER_HITBOX_INSET: i32 = 12;

    /// Enemy speed is drawn uniformly from this inclusive range at spawn
    pub const ENEMY_MIN_SPEED: i32 = 1;
    pub const ENEMY_MAX_SPEED: i32 = 3;

    /// Level 1 maze dimensions in tiles (before odd rounding)
    pub const BASE_MAZE_WIDTH: u32 = 21;
    pub const BASE_MAZE_HEIGHT: u32 = 15;
    /// Tiles added to both dimensions every two levels
    pub const MAZE_GROWTH: u32 = 4;

    /// Time budget (seconds)
    pub const BASE_TIME_LIMIT: f64 = 70.0;
    pub const MIN_TIME_LIMIT: f64 = 20.0;
    pub const TIME_LIMIT_DECAY: f64 = 2.5;

    /// HUD switches to the warning style below this many seconds
    pub const LOW_TIME_WARNING: f64 = 10.0;
}

/// Top-left world position of a tile
#[inline]
pub fn tile_to_world(tile: IVec2) -> IVec2 {
    tile * consts::TILE_SIZE
}

/// Tile containing a world position (floor division, so negatives round down)
#[inline]
pub fn world_to_tile(pos: IVec2) -> IVec2 {
    IVec2::new(
        pos.x.div_euclid(consts::TILE_SIZE),
        pos.y.div_euclid(consts::TILE_SIZE),
    )
}
