//! Flappy entry point
//!
//! Native: a headless demo run flown by the autopilot, with files for config,
//! settings and highscore in the given directory (default: current dir). An
//! optional second argument overrides the pipe mode.
//! Web: runs the same demo against LocalStorage and logs to the console.

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use wasm_bindgen::prelude::*;

    use flappy_settings::audio::LogAudio;
    use flappy_settings::highscores::LocalStorageHighscoreStore;
    use flappy_settings::platform::{Game, ScriptedInput};
    use flappy_settings::renderer::LogRenderer;
    use flappy_settings::{GameConfig, Settings};

    #[wasm_bindgen(start)]
    pub fn wasm_main() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        log::info!("Flappy (web) starting...");
    }

    /// Play one autopilot run; returns the final score
    #[wasm_bindgen]
    pub fn run_demo(max_ticks: u32) -> u32 {
        let mut game = Game::new(
            GameConfig::default(),
            Settings::load(),
            LocalStorageHighscoreStore,
            LogAudio,
            LogRenderer,
        );
        game.idle_mode = true;
        let summary = game.play(&mut ScriptedInput::idle(), u64::from(max_ticks));
        log::info!("Demo run: {:?}", summary);
        summary.score as u32
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use flappy_settings::audio::LogAudio;
    use flappy_settings::platform::{Game, ScriptedInput};
    use flappy_settings::renderer::LogRenderer;
    use flappy_settings::{FileHighscoreStore, GameConfig, PipeMode, Settings};

    env_logger::init();
    log::info!("Flappy (native) starting...");

    let mut args = std::env::args().skip(1);
    let dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let config = GameConfig::load(&dir.join("config.json"));
    let mut settings = Settings::load_from(&dir.join("settings.json"));
    if let Some(arg) = args.next() {
        match PipeMode::from_str(&arg) {
            Some(mode) => settings.pipe_mode = mode,
            None => log::warn!(
                "Unknown pipe mode {:?}, keeping {}",
                arg,
                settings.pipe_mode.as_str()
            ),
        }
    }
    let store = FileHighscoreStore::new(dir.join("highscore.txt"));

    // Two minutes of play at the configured rate
    let max_ticks = u64::from(config.ticks_per_second) * 120;

    let mut game = Game::new(config, settings, store, LogAudio, LogRenderer);
    game.idle_mode = true;
    let summary = game.play(&mut ScriptedInput::idle(), max_ticks);

    println!(
        "Score: {}  High Score: {}{}  ({:?} after {} ticks, seed {})",
        summary.score,
        summary.highscore,
        if summary.new_best { " (new!)" } else { "" },
        summary.reason,
        summary.ticks,
        summary.seed
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
