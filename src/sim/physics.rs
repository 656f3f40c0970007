//! Bird vertical physics
//!
//! Semi-implicit Euler at one step per tick: velocity first, then position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// The player's bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Top-left corner; x never changes during a run
    pub pos: Vec2,
    /// Vertical velocity (pixels/tick, positive is down)
    pub vel: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_X, BIRD_SPAWN_Y),
            vel: 0.0,
        }
    }
}

impl Bird {
    /// Jump impulse: velocity is replaced, not accumulated
    pub fn jump(&mut self) {
        self.vel = JUMP_STRENGTH;
    }

    /// Advance one tick under gravity
    pub fn integrate(&mut self) {
        self.vel += GRAVITY;
        self.pos.y += self.vel;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BIRD_WIDTH, BIRD_HEIGHT)
    }

    /// Horizontal center used for scoring
    pub fn center_x(&self) -> f32 {
        self.rect().center_x()
    }

    /// Above the ceiling or sunk into the ground
    pub fn out_of_bounds(&self, ground_y: f32) -> bool {
        self.pos.y < 0.0 || self.pos.y > ground_y - BIRD_HEIGHT
    }
}
