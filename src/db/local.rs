//! Local persistence of user-added songs and display preferences

use tracing::warn;

use super::engine::KeyValueStore;
use crate::error::{KaraokeError, Result};
use crate::models::{parse_font_scale, ContrastMode, Song};

/// Key holding the JSON array of locally added songs
pub const SONGS_KEY: &str = "karaoke.songs";

/// Persisted display preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pref {
    FontScale,
    Contrast,
}

impl Pref {
    pub fn key(&self) -> &'static str {
        match self {
            Pref::FontScale => "karaoke.fontScale",
            Pref::Contrast => "karaoke.contrast",
        }
    }
}

/// Adapter between the engine and a key-value store
pub struct LocalPersistence {
    store: Box<dyn KeyValueStore>,
}

impl LocalPersistence {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Songs the user added locally, in insertion order
    pub fn local_songs(&self) -> Result<Vec<Song>> {
        let raw = match self.store.get(SONGS_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };
        serde_json::from_str(&raw).map_err(|e| KaraokeError::LocalStoreCorrupt(e.to_string()))
    }

    pub fn set_local_songs(&mut self, songs: &[Song]) -> Result<()> {
        let raw = serde_json::to_string(songs)?;
        self.store.set(SONGS_KEY, &raw)
    }

    /// Read a preference; storage errors read as "unset"
    pub fn pref(&self, pref: Pref) -> Option<String> {
        match self.store.get(pref.key()) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read preference {}: {}", pref.key(), e);
                None
            }
        }
    }

    pub fn set_pref(&mut self, pref: Pref, value: &str) -> Result<()> {
        self.store.set(pref.key(), value)
    }

    /// Persisted font scale, clamped, or the default
    pub fn font_scale(&self) -> f64 {
        parse_font_scale(self.pref(Pref::FontScale).as_deref())
    }

    pub fn contrast(&self) -> ContrastMode {
        ContrastMode::parse(self.pref(Pref::Contrast).as_deref())
    }
}
