//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in as clock readings, never read directly
//! - Seeded RNG only
//! - Stable iteration order (row-major walls, spawn-ordered enemies)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod camera;
pub mod collision;
pub mod config;
pub mod entity;
pub mod level;
pub mod maze;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use camera::Camera;
pub use collision::move_and_collide;
pub use config::LevelConfig;
pub use entity::{Direction, Enemy, Player};
pub use level::{LevelOutcome, LevelState};
pub use maze::{Maze, Tile};
pub use rect::Rect;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, TickOutcome, tick};
