//! Controller owning the application state, the song store and persistence
//!
//! Each action runs to completion: it computes the next state, persists what
//! needs persisting, and returns a freshly rendered frame.

use tracing::{debug, info, warn};

use crate::core::export::{export_collection, ExportFile};
use crate::core::router::{Route, HOME_FRAGMENT};
use crate::core::state::{AppState, Notice};
use crate::db::{LocalPersistence, Pref};
use crate::error::Result;
use crate::models::{Song, SongForm, DEFAULT_LANGUAGE};
use crate::render::{render, search_results, Frame, Node, RenderOptions};
use crate::stores::SongStore;

/// Step applied by the font buttons and shortcuts
pub const FONT_STEP: f64 = 0.08;

const SAVED_MESSAGE: &str =
    "Música salva localmente! Use o botão \"Exportar\" no cabeçalho para baixar seu acervo.";

/// Settings the controller needs from configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    pub search_limit: usize,
    pub font_step: f64,
    pub language: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            search_limit: crate::render::SEARCH_LIMIT,
            font_step: FONT_STEP,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

pub struct Controller {
    state: AppState,
    store: SongStore,
    persistence: LocalPersistence,
    options: EngineOptions,
}

impl Controller {
    /// Load songs and preferences; the session starts on the Home view
    pub fn new(
        embedded: Vec<Song>,
        persistence: LocalPersistence,
        store: SongStore,
        options: EngineOptions,
    ) -> Self {
        let mut store = store;
        store.load(embedded, &persistence);

        let state = AppState::new(persistence.font_scale(), persistence.contrast());
        info!(
            "Preferences: font scale {}, contrast {}",
            state.font_scale, state.contrast
        );

        Self {
            state,
            store,
            persistence,
            options,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &SongStore {
        &self.store
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            search_limit: self.options.search_limit,
        }
    }

    /// Render the current state
    pub fn render(&self) -> Frame {
        render(&self.state, &self.store, &self.render_options())
    }

    fn transition(&mut self, f: impl FnOnce(AppState) -> AppState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }

    /// Fragment change: route, overwrite the view, re-render
    pub fn navigate(&mut self, fragment: &str) -> Frame {
        let route = Route::parse(fragment);
        debug!("Navigating to {:?} -> {:?}", fragment, route);
        if let Some(id) = &route.song_id {
            if let Err(e) = self.store.find(id) {
                debug!("Route references an unknown song: {}", e);
            }
        }
        self.transition(|s| s.with_route(route));
        self.render()
    }

    pub fn go_home(&mut self) -> Frame {
        self.navigate(HOME_FRAGMENT)
    }

    /// Adjust the font scale by `delta`, clamped, and persist it
    pub fn change_font(&mut self, delta: f64) -> Frame {
        self.transition(|s| s.with_font_delta(delta));
        let value = self.state.font_scale.to_string();
        if let Err(e) = self.persistence.set_pref(Pref::FontScale, &value) {
            warn!("Failed to persist font scale: {}", e);
        }
        self.render()
    }

    pub fn font_up(&mut self) -> Frame {
        self.change_font(self.options.font_step)
    }

    pub fn font_down(&mut self) -> Frame {
        self.change_font(-self.options.font_step)
    }

    pub fn toggle_contrast(&mut self) -> Frame {
        self.transition(|s| s.with_contrast_toggled());
        let value = self.state.contrast.as_str();
        if let Err(e) = self.persistence.set_pref(Pref::Contrast, value) {
            warn!("Failed to persist contrast mode: {}", e);
        }
        self.render()
    }

    /// Keystroke in the search field; returns only the results subtree
    pub fn search(&mut self, query: &str) -> Node {
        self.transition(|s| s.with_search(query));
        search_results(&self.store, query, self.options.search_limit)
    }

    /// Submit the add-song form
    ///
    /// Validation failures leave the store untouched and show the message
    /// next to the form.
    pub fn add_song(&mut self, form: SongForm) -> Result<Frame> {
        let song = match form.validate(&self.options.language) {
            Ok(song) => song,
            Err(e) => {
                debug!("Rejected song form: {}", e);
                let message = e.to_string();
                self.transition(|s| s.with_notice(Notice::error(message), Some(form)));
                return Err(e);
            }
        };

        let id = song.id.clone();
        if let Err(e) = self.store.upsert_local(song, &mut self.persistence) {
            warn!("Failed to save local song '{}': {}", id, e);
            self.transition(|s| {
                s.with_notice(Notice::error("Não foi possível salvar a música."), Some(form))
            });
            return Err(e);
        }

        info!("Saved local song '{}'", id);
        self.transition(|s| {
            s.with_route(Route::home())
                .with_notice(Notice::success(SAVED_MESSAGE), None)
        });
        Ok(self.render())
    }

    /// Keyboard shortcut dispatch; unknown keys do nothing
    pub fn handle_key(&mut self, key: &str) -> Option<Frame> {
        match key {
            "+" => Some(self.font_up()),
            "-" => Some(self.font_down()),
            "Escape" => Some(self.go_home()),
            k if k.eq_ignore_ascii_case("h") => Some(self.toggle_contrast()),
            _ => None,
        }
    }

    pub fn export(&self) -> Result<ExportFile> {
        export_collection(&self.store)
    }
}
