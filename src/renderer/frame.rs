//! Per-tick frame data for the renderer

use serde::Serialize;

use crate::sim::{GamePhase, GameState, PipeKind, Rect};

/// A pipe to draw; `Top` pipes use the flipped sprite
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipeSprite {
    pub kind: PipeKind,
    pub rect: Rect,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub tick: u64,
    pub bird: Rect,
    pub pipes: Vec<PipeSprite>,
    pub score: u64,
    pub phase: GamePhase,
}

impl Frame {
    /// Snapshot the drawable parts of a run
    pub fn capture(state: &GameState) -> Self {
        let pipes = state
            .pipes
            .iter()
            .flat_map(|group| group.rects())
            .map(|(kind, rect)| PipeSprite { kind, rect: *rect })
            .collect();
        Self {
            tick: state.time_ticks,
            bird: state.bird.rect(),
            pipes,
            score: state.score,
            phase: state.phase,
        }
    }

    /// HUD text drawn in the top-left corner
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{PipeGroup, PipeLayout};

    #[test]
    fn test_capture_tags_pipes() {
        let mut state = GameState::new(&GameConfig::default(), 1);
        state.pipes.push(PipeGroup::with_layout(PipeLayout::Both, 300.0, 200.0, 150.0));
        state.pipes.push(PipeGroup::with_layout(PipeLayout::BottomOnly, 500.0, 200.0, 150.0));
        state.score = 3;

        let frame = Frame::capture(&state);
        let kinds: Vec<_> = frame.pipes.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PipeKind::Top, PipeKind::Bottom, PipeKind::Bottom]);
        assert_eq!(frame.pipes[0].rect.y, -120.0);
        assert_eq!(frame.bird, Rect::new(50.0, 200.0, 34.0, 24.0));
        assert_eq!(frame.score_label(), "Score: 3");
    }
}
