//! Run driver
//!
//! Wires the simulation to its collaborators: input source, audio sink,
//! renderer and highscore store. One `Game` lives for the whole process and
//! plays any number of runs.

use super::input::{InputSource, tick_input};
use super::time::FixedStep;
use crate::audio::{AudioManager, AudioSink};
use crate::config::GameConfig;
use crate::highscores::{HighScore, HighscoreStore};
use crate::renderer::{Frame, Renderer};
use crate::settings::Settings;
use crate::sim::{EndReason, GameState, tick};

/// Outcome of a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u64,
    /// Best score after this run
    pub highscore: u64,
    pub new_best: bool,
    pub reason: EndReason,
    pub ticks: u64,
    pub seed: u64,
}

/// Game instance holding collaborators and the current run
pub struct Game<H: HighscoreStore, A: AudioSink, R: Renderer> {
    config: GameConfig,
    settings: Settings,
    store: H,
    highscore: HighScore,
    audio: AudioManager<A>,
    renderer: R,
    clock: FixedStep,
    state: Option<GameState>,
    /// Autopilot flies the bird
    pub idle_mode: bool,
}

impl<H: HighscoreStore, A: AudioSink, R: Renderer> Game<H, A, R> {
    /// Create the game; the highscore is read once here
    pub fn new(config: GameConfig, settings: Settings, store: H, sink: A, renderer: R) -> Self {
        let highscore = HighScore::load(&store);
        let clock = FixedStep::new(config.tick_dt(), config.max_substeps);
        Self {
            config,
            settings,
            store,
            highscore,
            audio: AudioManager::new(sink),
            renderer,
            clock,
            state: None,
            idle_mode: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Settings may change at any time; pipe mode applies from the next spawn
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub fn highscore(&self) -> u64 {
        self.highscore.best
    }

    /// The run in progress, if any
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    pub fn store(&self) -> &H {
        &self.store
    }

    pub fn audio(&self) -> &AudioManager<A> {
        &self.audio
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Begin a new run, replacing any run in progress
    pub fn start_run(&mut self) {
        let state = GameState::from_config(&self.config);
        log::info!(
            "Run started (seed {}, {} pipes)",
            state.seed,
            self.settings.pipe_mode.as_str()
        );
        self.audio.apply_settings(&self.settings);
        self.audio.start_run();
        self.clock.reset();
        self.state = Some(state);
    }

    /// Run exactly one tick. Returns the summary on the tick the run ends.
    pub fn step(&mut self, input: &mut dyn InputSource) -> Option<RunSummary> {
        let state = self.state.as_mut()?;

        let events = input.poll();
        let commands = tick_input(&events, self.idle_mode);
        let report = tick(state, &commands, &self.settings);

        self.audio.apply_settings(&self.settings);
        if let Some(event) = report.event {
            self.audio.on_event(event);
        }

        // The colliding frame is drawn too
        self.renderer.draw(&Frame::capture(state));

        report.ended.map(|_| self.finish())
    }

    /// Feed a wall-clock frame; runs as many ticks as are due
    pub fn advance(&mut self, frame_secs: f32, input: &mut dyn InputSource) -> Option<RunSummary> {
        let steps = self.clock.advance(frame_secs);
        for _ in 0..steps {
            if let Some(summary) = self.step(input) {
                return Some(summary);
            }
        }
        None
    }

    /// Start a run and tick it to the end, quitting after `max_ticks`
    pub fn play(&mut self, input: &mut dyn InputSource, max_ticks: u64) -> RunSummary {
        self.start_run();
        loop {
            if let Some(summary) = self.step(input) {
                return summary;
            }
            if self.state.as_ref().is_some_and(|s| s.time_ticks >= max_ticks) {
                return self.quit_run();
            }
        }
    }

    /// Abandon the current run; the highscore is still written
    pub fn quit_run(&mut self) -> RunSummary {
        if let Some(state) = self.state.as_mut() {
            state.end(EndReason::Quit);
        }
        self.finish()
    }

    fn finish(&mut self) -> RunSummary {
        let state = self.state.take();
        let (score, reason, ticks, seed) = match &state {
            Some(s) => (
                s.score,
                s.end_reason.unwrap_or(EndReason::Quit),
                s.time_ticks,
                s.seed,
            ),
            None => (0, EndReason::Quit, 0, 0),
        };

        let new_best = self.highscore.record(score, &mut self.store);
        self.audio.end_run();

        RunSummary {
            score,
            highscore: self.highscore.best,
            new_best,
            reason,
            ticks,
            seed,
        }
    }
}
