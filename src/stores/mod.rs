//! In-memory song store

mod song_store;

pub use song_store::{merge_songs, SongStore};
