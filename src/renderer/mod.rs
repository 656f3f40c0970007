//! Rendering handoff
//!
//! Drawing happens outside the gameplay core. Each tick the driver builds a
//! `Frame` and hands it to a `Renderer`.

pub mod frame;

pub use frame::{Frame, PipeSprite};

/// Draws one frame per tick
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

/// Logs a one-line summary per frame
#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &Frame) {
        log::trace!(
            "tick {} bird y={:.1} pipes={} {}",
            frame.tick,
            frame.bird.y,
            frame.pipes.len(),
            frame.score_label()
        );
    }
}

/// Keeps every frame it is given
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<Frame>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}
