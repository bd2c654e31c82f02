//! Text renderer: one character per tile of the viewport

use std::io::Write;

use super::Renderer;
use super::frame::{Frame, SpriteKind};
use crate::Result;
use crate::consts::TILE_SIZE;

/// Writes every `interval`-th frame as a block of text
pub struct AsciiRenderer<W: Write> {
    out: W,
    interval: u64,
    frames: u64,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W, interval: u64) -> Self {
        Self {
            out,
            interval: interval.max(1),
            frames: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn glyph(kind: SpriteKind) -> char {
    match kind {
        SpriteKind::Floor => '.',
        SpriteKind::Wall => '#',
        SpriteKind::Player => '@',
        SpriteKind::Exit => 'E',
        SpriteKind::Enemy => 'x',
    }
}

/// Rasterize a frame into rows of glyphs. Each item lands on the screen cell
/// under its center; later items overwrite earlier ones, as in the draw order.
pub fn rasterize(frame: &Frame) -> Vec<String> {
    let cols = (frame.viewport.x / TILE_SIZE).max(1) as usize;
    let rows = (frame.viewport.y / TILE_SIZE).max(1) as usize;
    let mut grid = vec![vec![' '; cols]; rows];

    for item in &frame.items {
        let center = frame.screen_rect(item).center();
        if center.x < 0 || center.y < 0 {
            continue;
        }
        let (cx, cy) = ((center.x / TILE_SIZE) as usize, (center.y / TILE_SIZE) as usize);
        if let Some(cell) = grid.get_mut(cy).and_then(|row| row.get_mut(cx)) {
            *cell = glyph(item.kind);
        }
    }

    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.frames += 1;
        if (self.frames - 1) % self.interval != 0 {
            return Ok(());
        }

        let hud = &frame.hud;
        let timer = if hud.low_time { "!" } else { "" };
        writeln!(
            self.out,
            "Time: {}s{}    Level: {}",
            hud.time_remaining, timer, hud.level
        )?;
        for row in rasterize(frame) {
            writeln!(self.out, "{row}")?;
        }
        if !hud.active {
            writeln!(self.out, "GAME OVER - press R to restart")?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
