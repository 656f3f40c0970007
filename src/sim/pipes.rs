//! Pipe groups and the timed pipe generator
//!
//! A pipe group is one obstacle column: a top pipe hanging from above, a
//! bottom pipe rising from below, or both with a gap between them.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::settings::PipeMode;

/// Which pipes a group carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeLayout {
    Both,
    TopOnly,
    BottomOnly,
}

/// Top or bottom pipe (renderers flip the top sprite)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipeKind {
    Top,
    Bottom,
}

/// Present pipes; there is no variant without one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Pipes {
    Both { top: Rect, bottom: Rect },
    TopOnly(Rect),
    BottomOnly(Rect),
}

/// One obstacle column. At least one of `top`/`bottom` is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeGroup {
    pipes: Pipes,
    /// Already counted toward the score
    pub scored: bool,
}

impl PipeGroup {
    /// Build a group from raw rectangles; `None` if both are absent
    pub fn new(top: Option<Rect>, bottom: Option<Rect>) -> Option<Self> {
        let pipes = match (top, bottom) {
            (Some(top), Some(bottom)) => Pipes::Both { top, bottom },
            (Some(top), None) => Pipes::TopOnly(top),
            (None, Some(bottom)) => Pipes::BottomOnly(bottom),
            (None, None) => return None,
        };
        Some(Self {
            pipes,
            scored: false,
        })
    }

    /// Build a group around a gap whose upper edge sits at `height`
    pub fn with_layout(layout: PipeLayout, x: f32, height: f32, gap: f32) -> Self {
        let top = Rect::new(x, height - PIPE_HEIGHT, PIPE_WIDTH, PIPE_HEIGHT);
        let bottom = Rect::new(x, height + gap, PIPE_WIDTH, PIPE_HEIGHT);
        let pipes = match layout {
            PipeLayout::Both => Pipes::Both { top, bottom },
            PipeLayout::TopOnly => Pipes::TopOnly(top),
            PipeLayout::BottomOnly => Pipes::BottomOnly(bottom),
        };
        Self {
            pipes,
            scored: false,
        }
    }

    pub fn top(&self) -> Option<&Rect> {
        match &self.pipes {
            Pipes::Both { top, .. } | Pipes::TopOnly(top) => Some(top),
            Pipes::BottomOnly(_) => None,
        }
    }

    pub fn bottom(&self) -> Option<&Rect> {
        match &self.pipes {
            Pipes::Both { bottom, .. } | Pipes::BottomOnly(bottom) => Some(bottom),
            Pipes::TopOnly(_) => None,
        }
    }

    pub fn layout(&self) -> PipeLayout {
        match self.pipes {
            Pipes::Both { .. } => PipeLayout::Both,
            Pipes::TopOnly(_) => PipeLayout::TopOnly,
            Pipes::BottomOnly(_) => PipeLayout::BottomOnly,
        }
    }

    /// Present rectangles, top first
    pub fn rects(&self) -> impl Iterator<Item = (PipeKind, &Rect)> {
        self.top()
            .map(|r| (PipeKind::Top, r))
            .into_iter()
            .chain(self.bottom().map(|r| (PipeKind::Bottom, r)))
    }

    /// Rectangle whose center decides scoring (bottom preferred)
    pub fn reference_rect(&self) -> &Rect {
        match &self.pipes {
            Pipes::Both { bottom, .. } | Pipes::BottomOnly(bottom) => bottom,
            Pipes::TopOnly(top) => top,
        }
    }

    /// Vertical distance between the top pipe's lower edge and the bottom pipe's upper edge
    pub fn gap(&self) -> Option<f32> {
        match &self.pipes {
            Pipes::Both { top, bottom } => Some(bottom.y - top.bottom()),
            _ => None,
        }
    }

    pub fn shift_left(&mut self, dx: f32) {
        match &mut self.pipes {
            Pipes::Both { top, bottom } => {
                top.shift_left(dx);
                bottom.shift_left(dx);
            }
            Pipes::TopOnly(rect) | Pipes::BottomOnly(rect) => rect.shift_left(dx),
        }
    }

    /// Every present pipe has scrolled fully past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.rects().all(|(_, r)| r.x <= -PIPE_WIDTH)
    }
}

/// Spawns a pipe group every `SPAWN_THRESHOLD + 1` ticks
#[derive(Debug, Clone)]
pub struct PipeGenerator {
    timer: u32,
    rng: Pcg32,
    screen_width: f32,
    screen_height: f32,
}

impl PipeGenerator {
    pub fn new(seed: u64, screen_width: f32, screen_height: f32) -> Self {
        Self {
            timer: 0,
            rng: Pcg32::seed_from_u64(seed),
            screen_width,
            screen_height,
        }
    }

    /// Ticks since the last spawn
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Advance the spawn timer; returns a new group when the threshold is crossed
    pub fn tick(&mut self, mode: PipeMode) -> Option<PipeGroup> {
        self.timer += 1;
        if self.timer <= SPAWN_THRESHOLD {
            return None;
        }
        self.timer = 0;
        let group = self.spawn(mode);
        log::debug!(
            "Spawned {:?} pipe group ({:?}) at x={}",
            mode,
            group.layout(),
            group.reference_rect().x
        );
        Some(group)
    }

    /// Generate one group with the given policy
    pub fn spawn(&mut self, mode: PipeMode) -> PipeGroup {
        match mode {
            PipeMode::Consistent => self.spawn_consistent(),
            PipeMode::Dynamic => self.spawn_dynamic(),
        }
    }

    fn spawn_consistent(&mut self) -> PipeGroup {
        let height = self
            .rng
            .random_range(CONSISTENT_HEIGHT_MIN..CONSISTENT_HEIGHT_MAX);
        let x = self.screen_width + PIPE_WIDTH;
        PipeGroup::with_layout(PipeLayout::Both, x, height as f32, CONSISTENT_GAP)
    }

    fn spawn_dynamic(&mut self) -> PipeGroup {
        let gap = self.rng.random_range(DYNAMIC_GAP_MIN..=DYNAMIC_GAP_MAX);
        let spacing = self
            .rng
            .random_range(DYNAMIC_SPACING_MIN..=DYNAMIC_SPACING_MAX);

        // Short screens would leave an empty range; keep at least one value
        let height_max = (self.screen_height as i32 - gap - DYNAMIC_FLOOR_MARGIN)
            .max(DYNAMIC_HEIGHT_MIN + 1);
        let height = self.rng.random_range(DYNAMIC_HEIGHT_MIN..height_max);

        // Both rolls always happen; a lone top pipe wins when both fire
        let top_only = self.rng.random_bool(SINGLE_PIPE_CHANCE);
        let bottom_only = self.rng.random_bool(SINGLE_PIPE_CHANCE);
        let layout = if top_only {
            PipeLayout::TopOnly
        } else if bottom_only {
            PipeLayout::BottomOnly
        } else {
            PipeLayout::Both
        };

        let x = self.screen_width + spacing as f32;
        PipeGroup::with_layout(layout, x, height as f32, gap as f32)
    }
}
