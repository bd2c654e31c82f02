//! Per-frame simulation tick
//!
//! Drives the Active/GameOver state machine around `LevelState::tick`.

use serde::{Deserialize, Serialize};

use super::level::LevelOutcome;
use super::state::{GamePhase, GameState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held direction keys
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Restart requested this tick (honored only after a game over)
    pub restart: bool,
    /// Quit requested this tick
    pub quit: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Play goes on (also reported while idling in GameOver)
    Continue,
    /// The exit was reached; the next level is already set up
    LevelComplete,
    /// The player was caught or ran out of time
    GameOver,
    /// Quit was requested; the loop should stop
    Terminated,
}

/// Advance the game by one frame.
///
/// `now` is the current clock reading in seconds; only differences between
/// readings matter.
pub fn tick(state: &mut GameState, input: &TickInput, now: f64) -> TickOutcome {
    if input.quit {
        log::info!("Quit requested at level {}", state.level);
        return TickOutcome::Terminated;
    }

    if state.phase == GamePhase::GameOver {
        if !input.restart {
            return TickOutcome::Continue;
        }
        log::info!("Restarting from level {}", state.level);
        state.restart(now);
    }

    let (level, rng) = state.level_and_rng();
    match level.tick(input, now, rng) {
        LevelOutcome::Continue => TickOutcome::Continue,
        LevelOutcome::Complete => {
            log::info!(
                "Level {} complete in {:.1}s",
                state.level,
                state.level_state.elapsed
            );
            state.advance_level(now);
            TickOutcome::LevelComplete
        }
        outcome @ (LevelOutcome::Caught | LevelOutcome::TimeUp) => {
            let reason = if outcome == LevelOutcome::Caught {
                "caught by an enemy"
            } else {
                "out of time"
            };
            log::info!(
                "Game over at level {} after {:.1}s: {}",
                state.level,
                state.level_state.elapsed,
                reason
            );
            state.phase = GamePhase::GameOver;
            TickOutcome::GameOver
        }
    }
}
