//! Song model

use serde::{Deserialize, Serialize};

use crate::error::{KaraokeError, Result};
use crate::utils::slug::slug;

/// Language tag given to songs added through the local form
pub const DEFAULT_LANGUAGE: &str = "pt-BR";

/// A song with its lyrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Stable, URL-safe identifier
    pub id: String,
    /// Song title
    pub title: String,
    /// Artist or performer
    pub artist: String,
    /// Lyrics, paragraphs separated by blank lines
    #[serde(default)]
    pub lyrics: String,
    /// Informational language tag
    #[serde(default = "default_language")]
    pub language: String,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Song {
    /// Build a song whose id is derived from its title and artist
    pub fn from_form(title: &str, artist: &str, lyrics: &str, language: &str) -> Self {
        Self {
            id: Self::derive_id(title, artist),
            title: title.to_string(),
            artist: artist.to_string(),
            lyrics: lyrics.to_string(),
            language: language.to_string(),
            tags: Vec::new(),
        }
    }

    /// Id used for songs created locally
    pub fn derive_id(title: &str, artist: &str) -> String {
        slug(&format!("{}-{}", title, artist))
    }

    /// Fragment that routes to this song
    pub fn fragment(&self) -> String {
        format!("#/cancao/{}", self.id)
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Top-level document shape of the embedded dataset and of exports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongDocument {
    pub songs: Vec<Song>,
}

/// Raw input of the add-song form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub lyrics: String,
}

impl SongForm {
    /// Trim the fields and turn them into a song
    pub fn validate(&self, language: &str) -> Result<Song> {
        let title = self.title.trim();
        let artist = self.artist.trim();
        let lyrics = self.lyrics.trim();

        if title.is_empty() || artist.is_empty() || lyrics.is_empty() {
            return Err(KaraokeError::Validation(
                "Preencha título, artista e letra.".to_string(),
            ));
        }

        let song = Song::from_form(title, artist, lyrics, language);
        if song.id.is_empty() {
            return Err(KaraokeError::Validation(
                "Título e artista precisam conter letras ou números.".to_string(),
            ));
        }
        Ok(song)
    }
}
