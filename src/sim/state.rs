//! Top-level game state
//!
//! Owns the RNG, the level counter and the current `LevelState`. All
//! randomness in a run flows from the single seeded generator held here.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::LevelState;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// The level clock is running and the player can move
    Active,
    /// Caught or out of time; waiting for restart or quit
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current level (1-based)
    pub level: u32,
    pub phase: GamePhase,
    /// The level being played (or the frozen one after a game over)
    pub level_state: LevelState,
    /// Viewport size handed to each level's camera
    pub viewport: IVec2,
    rng: Pcg32,
}

impl GameState {
    /// Start a run at level 1
    pub fn new(seed: u64, viewport: IVec2, now: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let level_state = LevelState::setup(1, now, viewport, &mut rng);
        Self {
            seed,
            level: 1,
            phase: GamePhase::Active,
            level_state,
            viewport,
            rng,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// Replace the level with a fresh one for the next level number
    pub fn advance_level(&mut self, now: f64) {
        self.level = self.level.saturating_add(1);
        self.level_state = LevelState::setup(self.level, now, self.viewport, &mut self.rng);
    }

    /// Back to level 1 with a fresh maze, regardless of how far the run got
    pub fn restart(&mut self, now: f64) {
        self.level = 1;
        self.phase = GamePhase::Active;
        self.level_state = LevelState::setup(1, now, self.viewport, &mut self.rng);
    }

    /// Split borrow for ticking the level with the shared RNG
    pub(crate) fn level_and_rng(&mut self) -> (&mut LevelState, &mut Pcg32) {
        (&mut self.level_state, &mut self.rng)
    }
}
