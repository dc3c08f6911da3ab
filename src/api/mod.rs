//! HTTP surface for the karaoke album
//!
//! One engine session sits behind a mutex; every request runs its action to
//! completion while holding the lock.

pub mod prefs;
pub mod songs;
pub mod view;

use actix_web::web;
use parking_lot::Mutex;
use serde::Serialize;

use crate::core::{Controller, View};
use crate::render::{BoundHandler, Frame, Presentation};

/// Controller shared by all workers
pub type SharedController = web::Data<Mutex<Controller>>;

/// JSON form of a rendered frame
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameResponse {
    pub view: View,
    pub song_id: Option<String>,
    pub presentation: Presentation,
    pub html: String,
    pub bindings: Vec<BoundHandler>,
}

impl From<&Frame> for FrameResponse {
    fn from(frame: &Frame) -> Self {
        Self {
            view: frame.view,
            song_id: frame.song_id.clone(),
            presentation: frame.presentation,
            html: frame.html(),
            bindings: frame.bindings(),
        }
    }
}

/// Configure all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(view::configure)
        .configure(songs::configure)
        .service(web::scope("/prefs").configure(prefs::configure));
}
