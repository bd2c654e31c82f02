//! One level: maze, entities, clock
//!
//! A `LevelState` is built from scratch for every level and thrown away on
//! completion or restart; nothing but the level number carries over.

use glam::IVec2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::config::LevelConfig;
use super::entity::{Enemy, Player};
use super::maze::Maze;
use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::TILE_SIZE;
use crate::tile_to_world;

/// Result of advancing a level by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelOutcome {
    /// Nothing decided yet
    Continue,
    /// The player reached the exit
    Complete,
    /// The clock ran out
    TimeUp,
    /// The player touched an enemy
    Caught,
}

/// Everything that exists inside a single level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelState {
    /// 1-based level number
    pub level: u32,
    pub config: LevelConfig,
    pub maze: Maze,
    /// One tile-sized rect per wall cell, row-major
    pub walls: Vec<Rect>,
    /// Target tile; `None` only if the maze had a single floor cell
    pub exit: Option<Rect>,
    pub enemies: Vec<Enemy>,
    pub player: Player,
    pub camera: Camera,
    /// Clock reading (seconds) when the level began
    pub start_time: f64,
    /// Seconds since `start_time` as of the last tick
    pub elapsed: f64,
}

impl LevelState {
    /// Build a fresh level: config, maze, placements and clock
    pub fn setup<R: Rng + ?Sized>(level: u32, now: f64, viewport: IVec2, rng: &mut R) -> Self {
        let config = LevelConfig::for_level(level);
        let maze = Maze::generate(
            config.maze_width as usize,
            config.maze_height as usize,
            rng,
        );
        log::info!(
            "Level {}: maze={}x{} enemies={} time_limit={:.1}s",
            level,
            maze.width(),
            maze.height(),
            config.enemy_count,
            config.time_limit
        );
        Self::with_maze(level, config, maze, now, viewport, rng)
    }

    /// Populate a level on a given maze.
    ///
    /// Floor cells are shuffled and handed out in turn: player, exit, then
    /// enemies until either the requested count or the floor runs out.
    pub fn with_maze<R: Rng + ?Sized>(
        level: u32,
        config: LevelConfig,
        maze: Maze,
        now: f64,
        viewport: IVec2,
        rng: &mut R,
    ) -> Self {
        let mut floor = maze.floor_cells();
        floor.shuffle(rng);

        let player_cell = floor.pop().unwrap_or(maze.start());
        let player = Player::new(cell_to_world(player_cell));

        let exit = floor
            .pop()
            .map(|cell| Rect::tile(cell_to_world(cell), TILE_SIZE));
        if exit.is_none() {
            log::warn!("Level {level}: no floor left for the exit");
        }

        let wanted = config.enemy_count as usize;
        let mut enemies = Vec::with_capacity(wanted);
        while enemies.len() < wanted {
            let Some(cell) = floor.pop() else {
                break;
            };
            enemies.push(Enemy::spawn(cell_to_world(cell), rng));
        }
        if enemies.len() < wanted {
            log::warn!(
                "Level {level}: floor exhausted, placed {} of {wanted} enemies",
                enemies.len()
            );
        }

        let walls = maze
            .wall_cells()
            .into_iter()
            .map(|cell| Rect::tile(cell_to_world(cell), TILE_SIZE))
            .collect();

        log::debug!(
            "Level {level}: player at {:?}, exit at {:?}, {} enemies",
            player_cell,
            exit.map(|r| r.top_left()),
            enemies.len()
        );

        let mut camera = Camera::new(viewport, maze.pixel_size());
        camera.update(&player.rect);

        Self {
            level,
            config,
            maze,
            walls,
            exit,
            enemies,
            player,
            camera,
            start_time: now,
            elapsed: 0.0,
        }
    }

    /// Seconds left on the clock as of the last tick (negative once expired)
    pub fn time_remaining(&self) -> f64 {
        self.config.time_limit - self.elapsed
    }

    /// Advance one tick: move the player, then every enemy, then judge.
    ///
    /// Reaching the exit short-circuits the enemy and timer checks.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        input: &TickInput,
        now: f64,
        rng: &mut R,
    ) -> LevelOutcome {
        self.player.update(input, &self.walls);
        for enemy in &mut self.enemies {
            enemy.update(&self.walls, rng);
        }
        self.camera.update(&self.player.rect);

        self.elapsed = now - self.start_time;

        let hitbox = &self.player.hitbox;
        if self.exit.is_some_and(|exit| hitbox.overlaps(&exit)) {
            return LevelOutcome::Complete;
        }

        let caught = self.enemies.iter().any(|e| hitbox.overlaps(&e.rect));
        if caught {
            LevelOutcome::Caught
        } else if self.elapsed > self.config.time_limit {
            LevelOutcome::TimeUp
        } else {
            LevelOutcome::Continue
        }
    }
}

fn cell_to_world((x, y): (usize, usize)) -> IVec2 {
    tile_to_world(IVec2::new(x as i32, y as i32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
    use crate::sim::entity::Direction;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const VIEWPORT: IVec2 = IVec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);

    fn corridor_level(rows: &[&str], enemy_count: u32, rng: &mut Pcg32) -> LevelState {
        let config = LevelConfig {
            enemy_count,
            ..LevelConfig::for_level(1)
        };
        let maze = Maze::parse(rows).unwrap();
        LevelState::with_maze(1, config, maze, 0.0, VIEWPORT, rng)
    }

    #[test]
    fn test_setup_places_everything_on_floor() {
        let mut rng = Pcg32::seed_from_u64(1234);
        let level = LevelState::setup(5, 10.0, VIEWPORT, &mut rng);

        assert_eq!(level.config, LevelConfig::for_level(5));
        assert_eq!(level.enemies.len(), 3);
        assert_eq!(level.walls.len(), level.maze.wall_cells().len());
        assert_eq!(level.start_time, 10.0);
        assert_eq!(level.elapsed, 0.0);
        assert_eq!(level.camera.world, level.maze.pixel_size());

        let on_floor = |r: &Rect| {
            let x = (r.x / TILE_SIZE) as usize;
            let y = (r.y / TILE_SIZE) as usize;
            r.x % TILE_SIZE == 0 && r.y % TILE_SIZE == 0 && level.maze.is_floor(x, y)
        };
        assert!(on_floor(&level.player.rect));
        assert!(on_floor(&level.exit.unwrap()));
        assert!(level.enemies.iter().all(|e| on_floor(&e.rect)));

        // Distinct cells for player, exit and enemies
        let mut cells: Vec<IVec2> = level.enemies.iter().map(|e| e.rect.top_left()).collect();
        cells.push(level.player.rect.top_left());
        cells.push(level.exit.unwrap().top_left());
        let count = cells.len();
        cells.sort_by_key(|c| (c.x, c.y));
        cells.dedup();
        assert_eq!(cells.len(), count);
    }

    #[test]
    fn test_floor_exhaustion_yields_fewer_enemies() {
        let mut rng = Pcg32::seed_from_u64(1);
        let level = corridor_level(&["####", "#..#", "####"], 1, &mut rng);
        assert!(level.enemies.is_empty());
        assert!(level.exit.is_some());

        let level = corridor_level(&["#####", "#...#", "#####"], 4, &mut rng);
        assert_eq!(level.enemies.len(), 1);
    }

    #[test]
    fn test_single_floor_cell_has_no_exit() {
        let mut rng = Pcg32::seed_from_u64(1);
        let level = corridor_level(&["###", "#.#", "###"], 1, &mut rng);
        assert_eq!(level.player.rect.top_left(), IVec2::new(32, 32));
        assert!(level.exit.is_none());
        assert!(level.enemies.is_empty());
    }

    #[test]
    fn test_reaching_exit_completes() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut level = corridor_level(&["#####", "#...#", "#####"], 0, &mut rng);
        // Deterministic placement for the test
        level.player = Player::new(IVec2::new(32, 32));
        level.exit = Some(Rect::tile(IVec2::new(96, 32), TILE_SIZE));

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        let mut outcome = LevelOutcome::Continue;
        for i in 0..40 {
            outcome = level.tick(&right, i as f64 / 60.0, &mut rng);
            if outcome != LevelOutcome::Continue {
                break;
            }
        }
        assert_eq!(outcome, LevelOutcome::Complete);
    }

    #[test]
    fn test_exit_wins_over_enemy_and_timer() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut level = corridor_level(&["#####", "#...#", "#####"], 0, &mut rng);
        level.player = Player::new(IVec2::new(64, 32));
        level.exit = Some(Rect::tile(IVec2::new(64, 32), TILE_SIZE));
        level.enemies = vec![Enemy {
            rect: Rect::tile(IVec2::new(64, 32), TILE_SIZE),
            speed: 1,
            direction: Direction::Up,
        }];

        let outcome = level.tick(&TickInput::default(), 1_000.0, &mut rng);
        assert_eq!(outcome, LevelOutcome::Complete);
    }

    #[test]
    fn test_enemy_contact_catches_player() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut level = corridor_level(&["#####", "#...#", "#####"], 0, &mut rng);
        level.player = Player::new(IVec2::new(32, 32));
        level.exit = Some(Rect::tile(IVec2::new(96, 32), TILE_SIZE));
        level.enemies = vec![Enemy {
            rect: Rect::tile(IVec2::new(50, 32), TILE_SIZE),
            speed: 1,
            direction: Direction::Up,
        }];

        let outcome = level.tick(&TickInput::default(), 0.1, &mut rng);
        assert_eq!(outcome, LevelOutcome::Caught);
    }

    #[test]
    fn test_timer_expiry() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut level = corridor_level(&["#####", "#...#", "#####"], 0, &mut rng);
        level.player = Player::new(IVec2::new(32, 32));
        level.exit = Some(Rect::tile(IVec2::new(96, 32), TILE_SIZE));

        let idle = TickInput::default();
        assert_eq!(level.tick(&idle, 70.0, &mut rng), LevelOutcome::Continue);
        assert_eq!(level.time_remaining(), 0.0);
        assert_eq!(level.tick(&idle, 70.01, &mut rng), LevelOutcome::TimeUp);
        assert!(level.time_remaining() < 0.0);
    }
}
