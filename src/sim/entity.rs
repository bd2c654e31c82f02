//! Moving entities: the player and wandering enemies
//!
//! Both share the same move-with-collision capability from `collision`;
//! they differ only in which rect is used as the hitbox and in how the
//! per-tick delta is chosen.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::move_and_collide;
use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::*;

/// One of the four axis-aligned unit directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Unit vector (y grows downward)
    pub fn unit(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    /// Uniformly random direction
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// The controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Visual rect (one tile)
    pub rect: Rect,
    /// Collision box, inset from the visual rect for forgiving corners
    pub hitbox: Rect,
    pub speed: i32,
}

impl Player {
    /// Spawn with the visual rect's top-left at `pos`
    pub fn new(pos: IVec2) -> Self {
        let rect = Rect::tile(pos, TILE_SIZE);
        Self {
            rect,
            hitbox: rect.inflate(-PLAYER_HITBOX_INSET, -PLAYER_HITBOX_INSET),
            speed: PLAYER_SPEED,
        }
    }

    /// Per-tick delta for the pressed directions. Opposite keys resolve to
    /// right/down; diagonals are not normalized.
    pub fn delta_for(&self, input: &TickInput) -> IVec2 {
        let mut delta = IVec2::ZERO;
        if input.left {
            delta.x = -self.speed;
        }
        if input.right {
            delta.x = self.speed;
        }
        if input.up {
            delta.y = -self.speed;
        }
        if input.down {
            delta.y = self.speed;
        }
        delta
    }

    /// Move the hitbox against the walls, then re-center the visual rect on it
    pub fn update(&mut self, input: &TickInput, walls: &[Rect]) {
        let delta = self.delta_for(input);
        move_and_collide(&mut self.hitbox, delta.x, delta.y, walls);
        self.rect.set_center(self.hitbox.center());
    }
}

/// A wandering obstacle that bounces off walls in a random new direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Visual rect, also used as the hitbox
    pub rect: Rect,
    pub speed: i32,
    pub direction: Direction,
}

impl Enemy {
    /// Spawn at `pos` with a random speed and heading
    pub fn spawn<R: Rng + ?Sized>(pos: IVec2, rng: &mut R) -> Self {
        let speed = rng.random_range(ENEMY_MIN_SPEED..=ENEMY_MAX_SPEED);
        Self {
            rect: Rect::tile(pos, TILE_SIZE),
            speed,
            direction: Direction::random(rng),
        }
    }

    pub fn velocity(&self) -> IVec2 {
        self.direction.unit() * self.speed
    }

    /// Step along the current heading. If the enemy could not move at all,
    /// pick a fresh heading (which may repeat the old one).
    pub fn update<R: Rng + ?Sized>(&mut self, walls: &[Rect], rng: &mut R) {
        let before = self.rect.top_left();
        let vel = self.velocity();
        move_and_collide(&mut self.rect, vel.x, vel.y, walls);

        if self.rect.top_left() == before {
            self.direction = Direction::random(rng);
        }
    }
}
