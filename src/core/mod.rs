//! Core engine for the karaoke album

pub mod controller;
pub mod dataset;
pub mod export;
pub mod router;
pub mod sorting;
pub mod state;

pub use controller::{Controller, EngineOptions};
pub use router::{Route, View};
pub use sorting::{Collator, CodepointCollator, PtBrCollator};
