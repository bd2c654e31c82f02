//! JSON-lines renderer for an external drawing process

use std::io::Write;

use super::Renderer;
use super::frame::Frame;
use crate::Result;

/// Writes each frame as one line of JSON
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonLinesRenderer<W> {
    fn draw(&mut self, frame: &Frame) -> Result<()> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::build_frame;
    use crate::sim::GameState;
    use glam::IVec2;

    #[test]
    fn test_one_line_per_frame() {
        let state = GameState::new(42, IVec2::new(640, 480), 0.0);
        let frame = build_frame(&state);

        let mut renderer = JsonLinesRenderer::new(Vec::new());
        renderer.draw(&frame).unwrap();
        renderer.draw(&frame).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: Frame = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed, frame);
    }
}
