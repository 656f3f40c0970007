//! Game settings and preferences
//!
//! Persisted separately from the highscore: a JSON file on native,
//! LocalStorage on the web.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Pipe generation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PipeMode {
    /// Random gaps, spacing and single-pipe columns
    #[default]
    Dynamic,
    /// Fixed gap and rhythm
    Consistent,
}

impl PipeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipeMode::Dynamic => "Dynamic",
            PipeMode::Consistent => "Consistent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "dynamic" => Some(PipeMode::Dynamic),
            "consistent" => Some(PipeMode::Consistent),
            _ => None,
        }
    }

    /// The other mode
    pub fn toggled(&self) -> Self {
        match self {
            PipeMode::Dynamic => PipeMode::Consistent,
            PipeMode::Consistent => PipeMode::Dynamic,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pipe generation policy, read at every spawn
    pub pipe_mode: PipeMode,
    /// Sound effects (hit, point)
    pub sound: bool,
    /// Looping background music during a run
    pub music: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pipe_mode: PipeMode::Dynamic,
            sound: true,
            music: true,
        }
    }
}

impl Settings {
    pub fn toggle_pipe_mode(&mut self) {
        self.pipe_mode = self.pipe_mode.toggled();
        log::info!("Pipe mode: {}", self.pipe_mode.as_str());
    }

    pub fn toggle_sound(&mut self) {
        self.sound = !self.sound;
        log::info!("Sound: {}", on_off(self.sound));
    }

    pub fn toggle_music(&mut self) {
        self.music = !self.music;
        log::info!("Music: {}", on_off(self.music));
    }

    /// Settings screen labels, in display order
    pub fn labels(&self) -> [String; 3] {
        [
            format!("Pipes: {}", self.pipe_mode.as_str()),
            format!("Sound: {}", on_off(self.sound)),
            format!("Music: {}", on_off(self.music)),
        ]
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as JSON
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "On" } else { "Off" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.pipe_mode, PipeMode::Dynamic);
        assert!(settings.sound);
        assert!(settings.music);
    }

    #[test]
    fn test_toggles() {
        let mut settings = Settings::default();
        settings.toggle_pipe_mode();
        assert_eq!(settings.pipe_mode, PipeMode::Consistent);
        settings.toggle_pipe_mode();
        assert_eq!(settings.pipe_mode, PipeMode::Dynamic);

        settings.toggle_sound();
        settings.toggle_music();
        assert!(!settings.sound);
        assert!(!settings.music);
        assert_eq!(
            settings.labels(),
            [
                "Pipes: Dynamic".to_string(),
                "Sound: Off".to_string(),
                "Music: Off".to_string()
            ]
        );
    }

    #[test]
    fn test_pipe_mode_names() {
        assert_eq!(PipeMode::from_str("Consistent"), Some(PipeMode::Consistent));
        assert_eq!(PipeMode::from_str("DYNAMIC"), Some(PipeMode::Dynamic));
        assert_eq!(PipeMode::from_str("chaos"), None);
    }

    #[test]
    fn test_json_shape() {
        let settings: Settings = serde_json::from_str(r#"{ "pipe_mode": "consistent" }"#).unwrap();
        assert_eq!(settings.pipe_mode, PipeMode::Consistent);
        assert!(settings.sound);

        let json = serde_json::to_string(&Settings::default()).unwrap();
        assert!(json.contains(r#""pipe_mode":"dynamic""#));
    }

    #[test]
    fn test_file_roundtrip_and_missing_file() {
        let dir = std::env::temp_dir().join(format!("flappy-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.json");

        let mut settings = Settings::default();
        settings.toggle_pipe_mode();
        settings.toggle_music();
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);

        std::fs::write(&path, "not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());

        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
