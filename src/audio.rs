//! Audio signalling
//!
//! The simulation emits at most one `GameEvent` per tick; `AudioManager`
//! turns it into a sound effect when sound is enabled and forwards it to
//! whatever backend implements `AudioSink`.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bird hit a pipe, the ground or the ceiling
    Hit,
    /// Pipe group passed
    Point,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::Hit => SoundEffect::Hit,
            GameEvent::Point => SoundEffect::Point,
        }
    }
}

/// Playback backend (fire-and-forget)
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
    /// Start (`true`) or stop (`false`) the looping background track
    fn set_music(&mut self, playing: bool);
}

/// Logs every call; the native demo uses this in place of a mixer
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("♪ {:?}", effect);
    }

    fn set_music(&mut self, playing: bool) {
        log::debug!("♪ music {}", if playing { "started" } else { "stopped" });
    }
}

/// One call received by a `RecordingAudio`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    Play(SoundEffect),
    Music(bool),
}

/// Records calls in order
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.calls.push(AudioCall::Play(effect));
    }

    fn set_music(&mut self, playing: bool) {
        self.calls.push(AudioCall::Music(playing));
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    sound: bool,
    music: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        let defaults = Settings::default();
        Self {
            sink,
            sound: defaults.sound,
            music: defaults.music,
        }
    }

    /// Pick up the current sound/music toggles
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.sound = settings.sound;
        self.music = settings.music;
    }

    /// Run start: music on if enabled, otherwise make sure it is off
    pub fn start_run(&mut self) {
        self.sink.set_music(self.music);
    }

    /// Run end: music always stops
    pub fn end_run(&mut self) {
        self.sink.set_music(false);
    }

    /// Forward a tick's event as a sound effect
    pub fn on_event(&mut self, event: GameEvent) {
        if self.sound {
            self.sink.play(event.into());
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_gate() {
        let mut audio = AudioManager::new(RecordingAudio::default());
        audio.on_event(GameEvent::Point);

        let mut settings = Settings::default();
        settings.toggle_sound();
        audio.apply_settings(&settings);
        audio.on_event(GameEvent::Hit);

        assert_eq!(audio.sink().calls, vec![AudioCall::Play(SoundEffect::Point)]);
    }

    #[test]
    fn test_music_follows_setting() {
        let mut audio = AudioManager::new(RecordingAudio::default());
        audio.start_run();
        audio.end_run();

        let mut settings = Settings::default();
        settings.toggle_music();
        audio.apply_settings(&settings);
        audio.start_run();

        assert_eq!(
            audio.sink().calls,
            vec![
                AudioCall::Music(true),
                AudioCall::Music(false),
                AudioCall::Music(false)
            ]
        );
    }
}
