//! Demo driver that plays the game on its own
//!
//! Walks the unique maze path from the player's tile to the exit by
//! breadth-first search, steering toward the center of the next tile.
//! Enemies are ignored; after a game over it asks for a restart.

use std::collections::VecDeque;

use glam::IVec2;

use super::level::LevelState;
use super::state::GameState;
use super::tick::TickInput;
use crate::consts::TILE_SIZE;
use crate::world_to_tile;

/// Stateless steering policy
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    /// Input for the next tick
    pub fn steer(&self, state: &GameState) -> TickInput {
        if !state.is_active() {
            return TickInput {
                restart: true,
                ..Default::default()
            };
        }
        steer_level(&state.level_state)
    }
}

/// Direction keys that move the player toward the exit
pub fn steer_level(level: &LevelState) -> TickInput {
    let Some(exit) = level.exit else {
        return TickInput::default();
    };
    let center = level.player.hitbox.center();
    let from = world_to_tile(center);
    let to = world_to_tile(exit.center());

    let waypoint = next_tile(level, from, to).unwrap_or(to);
    let target = waypoint * TILE_SIZE + IVec2::splat(TILE_SIZE / 2);
    let diff = target - center;
    // Within one step of the target counts as aligned on that axis
    let tolerance = level.player.speed;

    TickInput {
        left: diff.x <= -tolerance,
        right: diff.x >= tolerance,
        up: diff.y <= -tolerance,
        down: diff.y >= tolerance,
        ..Default::default()
    }
}

/// Second tile on the shortest floor path from `from` to `to`
fn next_tile(level: &LevelState, from: IVec2, to: IVec2) -> Option<IVec2> {
    let maze = &level.maze;
    let (w, h) = (maze.width() as i32, maze.height() as i32);
    let index = |p: IVec2| (p.y * w + p.x) as usize;
    let in_bounds = |p: IVec2| p.x >= 0 && p.y >= 0 && p.x < w && p.y < h;
    if !in_bounds(from) || !in_bounds(to) {
        return None;
    }

    let mut parent: Vec<Option<IVec2>> = vec![None; (w * h) as usize];
    let mut seen = vec![false; (w * h) as usize];
    let mut queue = VecDeque::from([from]);
    seen[index(from)] = true;

    while let Some(cur) = queue.pop_front() {
        if cur == to {
            break;
        }
        for step in [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y] {
            let next = cur + step;
            if in_bounds(next)
                && !seen[index(next)]
                && maze.is_floor(next.x as usize, next.y as usize)
            {
                seen[index(next)] = true;
                parent[index(next)] = Some(cur);
                queue.push_back(next);
            }
        }
    }

    if !seen[index(to)] {
        return None;
    }
    // Walk back until the tile whose parent is the start
    let mut cur = to;
    while let Some(prev) = parent[index(cur)] {
        if prev == from {
            return Some(cur);
        }
        cur = prev;
    }
    Some(to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickOutcome, tick};

    #[test]
    fn test_solves_first_levels() {
        let mut state = GameState::new(31337, IVec2::new(640, 480), 0.0);
        let pilot = Autopilot;
        let mut completed = 0;

        for i in 0..20_000 {
            // Enemies are not part of this test
            state.level_state.enemies.clear();
            let input = pilot.steer(&state);
            match tick(&mut state, &input, i as f64 / 1_000.0) {
                TickOutcome::LevelComplete => completed += 1,
                TickOutcome::GameOver => panic!("autopilot ran out of time"),
                _ => {}
            }
            if completed == 3 {
                break;
            }
        }
        assert_eq!(completed, 3);
        assert_eq!(state.level, 4);
    }

    #[test]
    fn test_requests_restart_after_game_over() {
        let mut state = GameState::new(1, IVec2::new(640, 480), 0.0);
        state.phase = crate::sim::GamePhase::GameOver;
        assert!(Autopilot.steer(&state).restart);
    }
}
