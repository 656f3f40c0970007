//! Input events
//!
//! A source yields zero or more discrete events per tick. Multiple jumps in
//! one tick collapse into one: a jump resets velocity rather than adding to it.

use std::collections::VecDeque;

use crate::sim::TickInput;

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Jump key pressed
    Jump,
    /// Window closed / quit requested
    Quit,
}

/// Produces the events for each tick
pub trait InputSource {
    /// Drain the events pending for the next tick
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Fold one tick's events into a `TickInput`
pub fn tick_input(events: &[InputEvent], idle_mode: bool) -> TickInput {
    TickInput {
        jump: events.contains(&InputEvent::Jump),
        quit: events.contains(&InputEvent::Quit),
        idle_mode,
    }
}

/// Pre-recorded per-tick events; empty once the script runs out
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    ticks: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(ticks: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            ticks: ticks.into_iter().collect(),
        }
    }

    /// No events at all; with idle mode on, the autopilot flies
    pub fn idle() -> Self {
        Self::default()
    }

    /// Jump every `period` ticks, for `ticks` ticks
    pub fn every(period: usize, ticks: usize) -> Self {
        let period = period.max(1);
        Self::new((0..ticks).map(|i| {
            if i % period == 0 {
                vec![InputEvent::Jump]
            } else {
                Vec::new()
            }
        }))
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.ticks.pop_front().unwrap_or_default()
    }
}
