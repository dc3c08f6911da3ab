//! Storage module for the karaoke album
//!
//! This module keeps user-added songs and display preferences in a
//! string-valued key-value store scoped to the local profile.

mod engine;
mod local;

pub use engine::{FileStore, KeyValueStore, MemoryStore};
pub use local::{LocalPersistence, Pref, SONGS_KEY};
