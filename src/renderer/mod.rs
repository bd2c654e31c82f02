//! Rendering module
//!
//! Turns game state into abstract draw lists; concrete renderers decide
//! what to do with them.

pub mod ascii;
pub mod frame;
pub mod json;

pub use ascii::AsciiRenderer;
pub use frame::{DrawItem, Frame, Hud, SpriteKind, build_frame};
pub use json::JsonLinesRenderer;

use crate::Result;

/// Consumer of one frame per tick
pub trait Renderer {
    fn draw(&mut self, frame: &Frame) -> Result<()>;
}

/// Discards every frame
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &Frame) -> Result<()> {
        Ok(())
    }
}
