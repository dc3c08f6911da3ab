//! Render pipeline
//!
//! `render` is a pure function of the application state and the song store.
//! It applies the display preferences and builds the content region for the
//! current view. Every call rebuilds the whole tree; identical inputs give
//! identical frames.

mod home;
mod node;
mod page;
mod song;

pub use home::{home_view, search_results};
pub use node::{collect_bindings, el, text, Action, Binding, BoundHandler, Element, Event, Node};
pub use page::document;
pub use song::{lyrics_nodes, song_view};

use serde::Serialize;

use crate::core::router::View;
use crate::core::state::AppState;
use crate::models::ContrastMode;
use crate::stores::SongStore;

/// Default cap on live search results
pub const SEARCH_LIMIT: usize = 10;

/// Knobs that are configuration rather than state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub search_limit: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            search_limit: SEARCH_LIMIT,
        }
    }
}

/// Attributes applied to the root presentation context
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub font_scale: f64,
    pub contrast: ContrastMode,
}

impl Presentation {
    /// Inline style for the root element
    pub fn root_style(&self) -> String {
        format!("--font-scale: {}", self.font_scale)
    }
}

/// Preference application, independent of the view
pub fn apply_prefs(state: &AppState) -> Presentation {
    Presentation {
        font_scale: state.font_scale,
        contrast: state.contrast,
    }
}

/// One full render of the content region
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub view: View,
    pub song_id: Option<String>,
    pub presentation: Presentation,
    pub content: Node,
}

impl Frame {
    pub fn html(&self) -> String {
        self.content.to_html()
    }

    pub fn bindings(&self) -> Vec<BoundHandler> {
        collect_bindings(&self.content)
    }
}

pub fn render(state: &AppState, store: &SongStore, options: &RenderOptions) -> Frame {
    let presentation = apply_prefs(state);
    let content = match state.view {
        View::SongDetail => song_view(state, store),
        View::Home => home_view(state, store, options),
    };

    Frame {
        view: state.view,
        song_id: state.current_song_id.clone(),
        presentation,
        content,
    }
}
