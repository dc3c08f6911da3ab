//! Application state and its transitions
//!
//! Every transition consumes the state and returns the next one; nothing
//! here touches storage or the song store.

use serde::Serialize;

use crate::core::router::{Route, View};
use crate::models::{clamp_font_scale, ContrastMode, SongForm, DEFAULT_FONT_SCALE};

/// Severity of a user-visible notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message shown next to the add-song form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub view: View,
    /// Set exactly when `view` is `SongDetail`
    pub current_song_id: Option<String>,
    pub font_scale: f64,
    pub contrast: ContrastMode,
    pub search_query: String,
    pub notice: Option<Notice>,
    /// Form input kept after a rejected submission
    pub draft: Option<SongForm>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SCALE, ContrastMode::Normal)
    }
}

impl AppState {
    pub fn new(font_scale: f64, contrast: ContrastMode) -> Self {
        Self {
            view: View::Home,
            current_song_id: None,
            font_scale: clamp_font_scale(font_scale),
            contrast,
            search_query: String::new(),
            notice: None,
            draft: None,
        }
    }

    /// Overwrite view and song id; the content region is rebuilt from scratch
    pub fn with_route(self, route: Route) -> Self {
        Self {
            view: route.view,
            current_song_id: route.song_id,
            search_query: String::new(),
            notice: None,
            draft: None,
            ..self
        }
    }

    pub fn with_font_delta(self, delta: f64) -> Self {
        Self {
            font_scale: clamp_font_scale(self.font_scale + delta),
            ..self
        }
    }

    pub fn with_contrast_toggled(self) -> Self {
        Self {
            contrast: self.contrast.toggled(),
            ..self
        }
    }

    pub fn with_search(self, query: &str) -> Self {
        Self {
            search_query: query.to_string(),
            ..self
        }
    }

    pub fn with_notice(self, notice: Notice, draft: Option<SongForm>) -> Self {
        Self {
            notice: Some(notice),
            draft,
            ..self
        }
    }
}
