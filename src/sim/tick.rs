//! Fixed timestep simulation tick
//!
//! Core game loop step. The update order within a tick is fixed:
//! input, physics, spawn, scroll, collide, score, prune, bounds.

use serde::{Deserialize, Serialize};

use super::collision::bird_hits_pipes;
use super::scoring::score_passed_pipes;
use super::state::{EndReason, GameState};
use crate::consts::*;
use crate::settings::Settings;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// At least one jump key press this tick
    pub jump: bool,
    /// Abandon the run
    pub quit: bool,
    /// Idle/demo mode - autopilot flies the bird
    pub idle_mode: bool,
}

/// Side-effect signal for the audio layer (at most one per tick)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Bird hit a pipe, the ground or the ceiling
    Hit,
    /// Bird passed a pipe group
    Point,
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Points scored this tick
    pub points: u32,
    /// Groups spawned this tick
    pub spawned: u32,
    /// Groups pruned this tick
    pub pruned: u32,
    pub event: Option<GameEvent>,
    /// Set on the tick the run ended
    pub ended: Option<EndReason>,
}

/// Advance the run by one tick. Does nothing once the run has ended.
///
/// `settings` is read on every call, so a pipe mode change applies from the
/// next spawn on.
pub fn tick(state: &mut GameState, input: &TickInput, settings: &Settings) -> TickReport {
    let mut report = TickReport::default();
    if !state.is_running() {
        return report;
    }

    if input.quit {
        state.end(EndReason::Quit);
        report.ended = Some(EndReason::Quit);
        return report;
    }

    state.time_ticks += 1;

    // 1. Input
    if input.jump || (input.idle_mode && autopilot_wants_jump(state)) {
        state.bird.jump();
    }

    // 2. Physics
    state.bird.integrate();
    let bird = state.bird.rect();

    // 3. Spawn
    if let Some(group) = state.generator.tick(settings.pipe_mode) {
        state.pipes.push(group);
        report.spawned += 1;
    }

    // 4. Scroll
    for group in &mut state.pipes {
        group.shift_left(PIPE_SPEED);
    }

    // 5. Collide
    let hit_pipe = bird_hits_pipes(&bird, &state.pipes);

    // 6. Score
    let points = score_passed_pipes(&bird, &mut state.pipes);
    if points > 0 {
        state.score += u64::from(points);
        report.points = points;
        log::debug!("Scored {} (total {})", points, state.score);
    }

    // 7. Prune
    let before = state.pipes.len();
    state.pipes.retain(|g| !g.is_offscreen());
    report.pruned = (before - state.pipes.len()) as u32;

    // 8. Bounds
    let out_of_bounds = state.bird.out_of_bounds(state.ground_y);

    if hit_pipe {
        state.end(EndReason::PipeCollision);
    } else if out_of_bounds {
        state.end(EndReason::OutOfBounds);
    }
    // Only reachable while running, so any reason is from this tick
    report.ended = state.end_reason;

    report.event = if report.ended.is_some() {
        Some(GameEvent::Hit)
    } else if points > 0 {
        Some(GameEvent::Point)
    } else {
        None
    };

    report
}

/// Autopilot: flap whenever the bird is falling below the next gap
fn autopilot_wants_jump(state: &GameState) -> bool {
    if state.bird.vel < 0.0 {
        return false;
    }

    let bird_x = state.bird.pos.x;
    let next = state
        .pipes
        .iter()
        .find(|g| g.reference_rect().right() > bird_x);

    // Aim for the bird's top to sit this far above the lower obstacle
    let margin = 40.0;
    let floor = state.ground_y - BIRD_HEIGHT - margin;
    let target_y = match next {
        Some(group) => match (group.top(), group.bottom()) {
            (_, Some(bottom)) => bottom.y - BIRD_HEIGHT - margin,
            (Some(top), None) => top.bottom() + margin,
            (None, None) => floor,
        },
        None => BIRD_SPAWN_Y,
    };

    state.bird.pos.y > target_y.min(floor)
}
