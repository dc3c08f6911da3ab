//! Embedded song dataset

use std::fs;
use std::path::Path;

use tracing::{error, info};

use crate::error::{KaraokeError, Result};
use crate::models::{Song, SongDocument};

/// Dataset compiled into the binary
pub const BUNDLED_DATASET: &str = include_str!("../../assets/songs.json");

/// Parse a `{ "songs": [...] }` document
pub fn parse_dataset(content: &str) -> Result<Vec<Song>> {
    let document: SongDocument = serde_json::from_str(content)
        .map_err(|e| KaraokeError::DatasetMissing(format!("invalid dataset document: {}", e)))?;
    Ok(document.songs)
}

/// Read the dataset from `path`, or the bundled one when no path is set
pub fn read_dataset(path: Option<&Path>) -> Result<Vec<Song>> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                KaraokeError::DatasetMissing(format!("cannot read {:?}: {}", path, e))
            })?;
            parse_dataset(&content)
        }
        None => parse_dataset(BUNDLED_DATASET),
    }
}

/// Load the embedded songs, logging and degrading to an empty set on failure
pub fn load_embedded(path: Option<&Path>) -> Vec<Song> {
    match read_dataset(path) {
        Ok(songs) => {
            info!("Embedded dataset has {} songs", songs.len());
            songs
        }
        Err(e) => {
            error!("{}. The catalog starts without embedded songs.", e);
            Vec::new()
        }
    }
}
