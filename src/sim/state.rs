//! Per-run session state
//!
//! Everything a single run owns lives here; a new run starts from a fresh
//! `GameState`.

use serde::{Deserialize, Serialize};

use super::physics::Bird;
use super::pipes::{PipeGenerator, PipeGroup};
use crate::config::GameConfig;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run over; the session no longer ticks
    Ended,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Bird hit a pipe
    PipeCollision,
    /// Bird left the playfield through the ceiling or ground
    OutOfBounds,
    /// Player quit mid-run
    Quit,
}

/// Complete state of one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Pipe RNG seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Set when `phase` becomes `Ended`
    pub end_reason: Option<EndReason>,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub bird: Bird,
    /// Live pipe groups in spawn order
    pub pipes: Vec<PipeGroup>,
    pub generator: PipeGenerator,
    /// Bird is out of bounds once its top passes `ground_y - BIRD_HEIGHT`
    pub ground_y: f32,
}

impl GameState {
    /// Start a run with the given pipe seed
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Running,
            end_reason: None,
            score: 0,
            time_ticks: 0,
            bird: Bird::default(),
            pipes: Vec::new(),
            generator: PipeGenerator::new(seed, config.screen_width, config.screen_height),
            ground_y: config.ground_y(),
        }
    }

    /// Start a run, seeding from the config or a fresh random draw
    pub fn from_config(config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::new(config, seed)
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Enter `Ended`; the first reason recorded wins
    pub fn end(&mut self, reason: EndReason) {
        if self.phase == GamePhase::Ended {
            return;
        }
        self.phase = GamePhase::Ended;
        self.end_reason = Some(reason);
        log::info!(
            "Run ended after {} ticks: {:?}, score {}",
            self.time_ticks,
            reason,
            self.score
        );
    }
}
