//! Procedural maze generation
//!
//! Randomized depth-first carving on a 2-step lattice. Cells with both
//! coordinates odd are rooms; the cell between two rooms is opened when the
//! carve walks from one to the other. Since a room is only entered while it
//! is still a wall, the floor cells always form a spanning tree: one
//! connected component, no loops, corridors and walls exactly one tile wide.

use std::fmt;

use glam::IVec2;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::consts::TILE_SIZE;

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Floor,
}

impl Tile {
    pub fn as_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
        }
    }

    #[cfg(test)]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Floor),
            _ => None,
        }
    }
}

/// Two-step moves between lattice rooms
const CARVE_STEPS: [(i32, i32); 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

/// A rectangular wall/floor grid (row-major)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maze {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    /// Cell the carve started from (always floor)
    start: (usize, usize),
}

impl Maze {
    /// Generate a perfect maze of at least `width` x `height` tiles.
    ///
    /// Even dimensions are bumped to the next odd value (zero becomes one);
    /// read the real size back from [`Maze::width`] and [`Maze::height`].
    pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Self {
        let width = round_up_odd(width);
        let height = round_up_odd(height);

        let mut maze = Self {
            width,
            height,
            tiles: vec![Tile::Wall; width * height],
            start: (random_odd(width, rng), random_odd(height, rng)),
        };

        let (sx, sy) = maze.start;
        maze.set(sx, sy, Tile::Floor);
        maze.carve_from(sx, sy, rng);
        maze
    }

    /// Iterative form of the recursive carve. Each frame owns its own shuffled
    /// step order, drawn when the cell is entered, so the RNG is consumed in
    /// the same sequence a recursive implementation would use.
    fn carve_from<R: Rng + ?Sized>(&mut self, x: usize, y: usize, rng: &mut R) {
        let mut stack = vec![CarveFrame::enter(x, y, rng)];

        while let Some(frame) = stack.last_mut() {
            let Some((dx, dy)) = frame.next_step() else {
                stack.pop();
                continue;
            };
            let (cx, cy) = (frame.x as i32, frame.y as i32);
            let (nx, ny) = (cx + dx, cy + dy);

            if self.tile_at(nx, ny) == Some(Tile::Wall) {
                self.set(nx as usize, ny as usize, Tile::Floor);
                self.set((cx + dx / 2) as usize, (cy + dy / 2) as usize, Tile::Floor);
                stack.push(CarveFrame::enter(nx as usize, ny as usize, rng));
            }
        }
    }

    /// Parse a maze from rows of `#` (wall) and `.` (floor).
    ///
    /// Rows must be non-empty and of equal length. The first floor cell in
    /// row-major order becomes the start cell.
    #[cfg(test)]
    pub fn parse(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.chars().count();
        if width == 0 {
            return None;
        }

        let mut tiles = Vec::with_capacity(width * height);
        for row in rows {
            if row.chars().count() != width {
                return None;
            }
            for c in row.chars() {
                tiles.push(Tile::from_char(c)?);
            }
        }

        let first_floor = tiles.iter().position(|t| *t == Tile::Floor)?;
        Some(Self {
            width,
            height,
            tiles,
            start: (first_floor % width, first_floor / width),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// Tile at signed coordinates; `None` outside the grid
    pub fn tile_at(&self, x: i32, y: i32) -> Option<Tile> {
        if x < 0 || y < 0 {
            return None;
        }
        self.get(x as usize, y as usize)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        if x < self.width && y < self.height {
            Some(self.tiles[y * self.width + x])
        } else {
            None
        }
    }

    pub fn is_floor(&self, x: usize, y: usize) -> bool {
        self.get(x, y) == Some(Tile::Floor)
    }

    fn set(&mut self, x: usize, y: usize, tile: Tile) {
        self.tiles[y * self.width + x] = tile;
    }

    /// Coordinates of every cell of the given kind, row-major
    pub fn cells(&self, kind: Tile) -> Vec<(usize, usize)> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == kind)
            .map(|(i, _)| (i % self.width, i / self.width))
            .collect()
    }

    pub fn floor_cells(&self) -> Vec<(usize, usize)> {
        self.cells(Tile::Floor)
    }

    pub fn wall_cells(&self) -> Vec<(usize, usize)> {
        self.cells(Tile::Wall)
    }

    /// World-space size of the whole grid
    pub fn pixel_size(&self) -> IVec2 {
        IVec2::new(self.width as i32, self.height as i32) * TILE_SIZE
    }

    /// Rows of `#`/`.` characters
    pub fn rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.width)
            .map(|row| row.iter().map(|t| t.as_char()).collect())
            .collect()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

/// One level of the carve "recursion"
struct CarveFrame {
    x: usize,
    y: usize,
    steps: [(i32, i32); 4],
    next: usize,
}

impl CarveFrame {
    fn enter<R: Rng + ?Sized>(x: usize, y: usize, rng: &mut R) -> Self {
        let mut steps = CARVE_STEPS;
        steps.shuffle(rng);
        Self { x, y, steps, next: 0 }
    }

    fn next_step(&mut self) -> Option<(i32, i32)> {
        let step = self.steps.get(self.next).copied();
        self.next += 1;
        step
    }
}

fn round_up_odd(n: usize) -> usize {
    if n % 2 == 0 { n + 1 } else { n }
}

/// Uniform odd coordinate in `1..dim`. A dimension of 1 has no odd index,
/// so the lattice collapses onto 0 there.
fn random_odd<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> usize {
    let odd_count = dim / 2;
    if odd_count == 0 {
        0
    } else {
        1 + 2 * rng.random_range(0..odd_count)
    }
}
