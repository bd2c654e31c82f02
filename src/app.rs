//! The frame loop
//!
//! One iteration per frame: poll input, tick the simulation, build and draw
//! the frame, then wait for the next frame slot. Single-threaded; the only
//! way out is a `Terminated` outcome or the optional frame cap.

use crate::Result;
use crate::platform::{Clock, FramePacer, InputSource};
use crate::renderer::{Renderer, build_frame};
use crate::sim::{GameState, TickOutcome, tick};

/// Statistics of a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub levels_completed: u32,
    pub game_overs: u32,
    /// Highest level reached across restarts
    pub best_level: u32,
    /// Whether the run ended through a quit request
    pub quit: bool,
}

/// Owns the game and its collaborators for the length of a run
pub struct App<I, R, C> {
    pub game: GameState,
    input: I,
    renderer: R,
    clock: C,
    pacer: FramePacer,
    max_frames: Option<u64>,
}

impl<I: InputSource, R: Renderer, C: Clock> App<I, R, C> {
    pub fn new(game: GameState, input: I, renderer: R, clock: C, pacer: FramePacer) -> Self {
        Self {
            game,
            input,
            renderer,
            clock,
            pacer,
            max_frames: None,
        }
    }

    /// Stop after `frames` frames even without a quit request
    pub fn with_frame_limit(mut self, frames: Option<u64>) -> Self {
        self.max_frames = frames;
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run until quit or the frame cap
    pub fn run(&mut self) -> Result<RunSummary> {
        let mut summary = RunSummary {
            best_level: self.game.level,
            ..Default::default()
        };

        while self.max_frames.is_none_or(|max| summary.frames < max) {
            let input = self.input.poll(&self.game);
            let now = self.clock.now();

            match tick(&mut self.game, &input, now) {
                TickOutcome::Terminated => {
                    summary.quit = true;
                    break;
                }
                TickOutcome::LevelComplete => summary.levels_completed += 1,
                TickOutcome::GameOver => summary.game_overs += 1,
                TickOutcome::Continue => {}
            }
            summary.best_level = summary.best_level.max(self.game.level);

            // Level transitions have already rebuilt the level, so this never
            // shows a stale frame
            self.renderer.draw(&build_frame(&self.game))?;
            summary.frames += 1;
            self.pacer.wait();
        }

        log::info!(
            "Run finished after {} frames: best level {}, {} levels completed, {} game overs",
            summary.frames,
            summary.best_level,
            summary.levels_completed,
            summary.game_overs
        );
        Ok(summary)
    }
}
