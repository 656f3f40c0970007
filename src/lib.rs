//! Flappy - a single-screen bird-through-pipes arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, pipe generation, collisions, scoring)
//! - `config`: Screen geometry and timing loaded at startup
//! - `settings`: Player preferences (pipe mode, sound, music)
//! - `highscores`: Best-score persistence
//! - `audio`: Sound effect signals and gating
//! - `platform`: Input events and the fixed-rate driver
//! - `renderer`: Frame data handed to an external renderer

pub mod audio;
pub mod config;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use config::GameConfig;
pub use highscores::{FileHighscoreStore, HighscoreStore, MemoryHighscoreStore};
pub use settings::{PipeMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Default simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 512.0;
    /// Height of the ground strip drawn along the bottom edge
    pub const GROUND_HEIGHT: f32 = 112.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_SPAWN_Y: f32 = 200.0;
    pub const BIRD_WIDTH: f32 = 34.0;
    pub const BIRD_HEIGHT: f32 = 24.0;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set on jump (pixels/tick, negative is up)
    pub const JUMP_STRENGTH: f32 = -7.0;

    /// Pipe sprite dimensions
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const PIPE_HEIGHT: f32 = 320.0;
    /// Leftward pipe scroll (pixels/tick)
    pub const PIPE_SPEED: f32 = 2.0;
    /// Ticks between spawns (spawn fires once the timer exceeds this)
    pub const SPAWN_THRESHOLD: u32 = 100;

    /// Consistent mode: fixed gap, gap top drawn from [100, 300)
    pub const CONSISTENT_GAP: f32 = 150.0;
    pub const CONSISTENT_HEIGHT_MIN: i32 = 100;
    pub const CONSISTENT_HEIGHT_MAX: i32 = 300;

    /// Dynamic mode ranges
    pub const DYNAMIC_GAP_MIN: i32 = 120;
    pub const DYNAMIC_GAP_MAX: i32 = 180;
    pub const DYNAMIC_SPACING_MIN: i32 = 180;
    pub const DYNAMIC_SPACING_MAX: i32 = 300;
    pub const DYNAMIC_HEIGHT_MIN: i32 = 80;
    /// Clearance kept between the gap bottom and the screen bottom
    pub const DYNAMIC_FLOOR_MARGIN: i32 = 120;
    /// Chance of a lone top (or, independently, lone bottom) pipe
    pub const SINGLE_PIPE_CHANCE: f64 = 0.2;
}
