//! Utility modules for the karaoke album

pub mod escape;
pub mod slug;
