//! Data models for the karaoke album
//!
//! This module contains the song record and the display preference types.

mod prefs;
mod song;

pub use prefs::{
    clamp_font_scale, parse_font_scale, ContrastMode, DEFAULT_FONT_SCALE, MAX_FONT_SCALE,
    MIN_FONT_SCALE,
};
pub use song::{Song, SongDocument, SongForm, DEFAULT_LANGUAGE};
