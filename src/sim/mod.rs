//! Gameplay simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (pipe groups in spawn order)
//! - No rendering, audio or storage dependencies

pub mod collision;
pub mod physics;
pub mod pipes;
pub mod rect;
pub mod scoring;
pub mod state;
pub mod tick;

pub use collision::{bird_hits_pipes, rects_collide};
pub use physics::Bird;
pub use pipes::{PipeGenerator, PipeGroup, PipeKind, PipeLayout};
pub use rect::Rect;
pub use scoring::score_passed_pipes;
pub use state::{EndReason, GamePhase, GameState};
pub use tick::{GameEvent, TickInput, TickReport, tick};
