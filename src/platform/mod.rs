//! Platform layer
//!
//! Handles everything between the pure simulation and the outside world:
//! - Input events
//! - Fixed-rate timing
//! - The run driver wiring audio, rendering and highscore storage

pub mod input;
pub mod runner;
pub mod time;

pub use input::{InputEvent, InputSource, ScriptedInput, tick_input};
pub use runner::{Game, RunSummary};
pub use time::FixedStep;
