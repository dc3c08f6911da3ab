//! Fragment router

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SONG_ROUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#/cancao/([a-z0-9-]+)$").expect("valid song route pattern"));

/// Fragment that leads back to the home view
pub const HOME_FRAGMENT: &str = "#";

/// The two application views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    #[default]
    Home,
    SongDetail,
}

/// Result of routing a location fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub view: View,
    pub song_id: Option<String>,
}

impl Route {
    pub fn home() -> Self {
        Self::default()
    }

    pub fn song(id: impl Into<String>) -> Self {
        Self {
            view: View::SongDetail,
            song_id: Some(id.into()),
        }
    }

    /// Map a fragment to a route; anything but `#/cancao/<id>` is home
    pub fn parse(fragment: &str) -> Self {
        match SONG_ROUTE.captures(fragment) {
            Some(caps) => Self::song(&caps[1]),
            None => Self::home(),
        }
    }
}
