//! Highscore persistence
//!
//! The best score is a single integer. Stores fail soft: anything that
//! cannot be read counts as 0.

use std::path::{Path, PathBuf};

/// Storage for the best score
pub trait HighscoreStore {
    /// Stored best score, or 0 if none/unreadable
    fn load(&self) -> u64;
    fn save(&mut self, score: u64);
}

/// Plain-text integer file
#[derive(Debug, Clone)]
pub struct FileHighscoreStore {
    path: PathBuf,
}

impl FileHighscoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighscoreStore for FileHighscoreStore {
    fn load(&self) -> u64 {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => {
                log::info!("No highscore at {}, starting fresh", self.path.display());
                return 0;
            }
        };
        match text.trim().parse() {
            Ok(score) => {
                log::info!("Loaded highscore {}", score);
                score
            }
            Err(e) => {
                log::warn!("Unreadable highscore {:?}: {}", text, e);
                0
            }
        }
    }

    fn save(&mut self, score: u64) {
        match std::fs::write(&self.path, score.to_string()) {
            Ok(()) => log::info!("Highscore saved ({})", score),
            Err(e) => log::warn!("Failed to save highscore to {}: {}", self.path.display(), e),
        }
    }
}

/// In-memory store; counts writes so callers can check save behavior
#[derive(Debug, Clone, Default)]
pub struct MemoryHighscoreStore {
    pub score: u64,
    pub saves: u32,
}

impl MemoryHighscoreStore {
    pub fn with_score(score: u64) -> Self {
        Self { score, saves: 0 }
    }
}

impl HighscoreStore for MemoryHighscoreStore {
    fn load(&self) -> u64 {
        self.score
    }

    fn save(&mut self, score: u64) {
        self.score = score;
        self.saves += 1;
    }
}

/// LocalStorage-backed store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct LocalStorageHighscoreStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageHighscoreStore {
    const STORAGE_KEY: &'static str = "flappy_highscore";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl HighscoreStore for LocalStorageHighscoreStore {
    fn load(&self) -> u64 {
        Self::storage()
            .and_then(|s| s.get_item(Self::STORAGE_KEY).ok().flatten())
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    fn save(&mut self, score: u64) {
        if let Some(storage) = Self::storage() {
            match storage.set_item(Self::STORAGE_KEY, &score.to_string()) {
                Ok(()) => log::info!("Highscore saved ({})", score),
                Err(e) => log::warn!("Failed to save highscore: {:?}", e),
            }
        }
    }
}

/// Best score for the process lifetime, loaded once at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    pub fn load(store: &dyn HighscoreStore) -> Self {
        Self { best: store.load() }
    }

    /// Fold a finished run into the best score and persist it.
    ///
    /// The store is written after every run, whether or not the best changed.
    /// Returns true on a new best.
    pub fn record(&mut self, final_score: u64, store: &mut dyn HighscoreStore) -> bool {
        let new_best = final_score > self.best;
        self.best = self.best.max(final_score);
        store.save(self.best);
        if new_best {
            log::info!("New highscore: {}", self.best);
        }
        new_best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_best_is_saved() {
        let mut store = MemoryHighscoreStore::with_score(10);
        let mut high = HighScore::load(&store);
        assert!(high.record(12, &mut store));
        assert_eq!(high.best, 12);
        assert_eq!(store.score, 12);
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn test_lower_score_keeps_best_but_still_saves() {
        let mut store = MemoryHighscoreStore::with_score(10);
        let mut high = HighScore::load(&store);
        assert!(!high.record(5, &mut store));
        assert_eq!(high.best, 10);
        assert_eq!(store.score, 10);
        assert_eq!(store.saves, 1);
    }

    #[test]
    fn test_equal_score_is_not_a_new_best() {
        let mut store = MemoryHighscoreStore::with_score(7);
        let mut high = HighScore::load(&store);
        assert!(!high.record(7, &mut store));
    }

    #[test]
    fn test_file_store() {
        let dir = std::env::temp_dir().join(format!("flappy-highscore-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let mut store = FileHighscoreStore::new(dir.join("highscore.txt"));

        assert_eq!(store.load(), 0);
        store.save(42);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "42");
        assert_eq!(store.load(), 42);

        std::fs::write(store.path(), " 17\n").unwrap();
        assert_eq!(store.load(), 17);

        std::fs::write(store.path(), "garbage").unwrap();
        assert_eq!(store.load(), 0);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
