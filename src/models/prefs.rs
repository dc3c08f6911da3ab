//! Display preferences

use serde::{Deserialize, Serialize};

/// Smallest allowed font scale
pub const MIN_FONT_SCALE: f64 = 0.8;
/// Largest allowed font scale
pub const MAX_FONT_SCALE: f64 = 2.0;
/// Font scale used when nothing valid is persisted
pub const DEFAULT_FONT_SCALE: f64 = 1.15;

/// Clamp a font scale into the supported range
pub fn clamp_font_scale(value: f64) -> f64 {
    value.clamp(MIN_FONT_SCALE, MAX_FONT_SCALE)
}

/// Parse a persisted font scale, falling back to the default
pub fn parse_font_scale(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(clamp_font_scale)
        .unwrap_or(DEFAULT_FONT_SCALE)
}

/// Contrast mode of the presentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContrastMode {
    #[default]
    Normal,
    High,
}

impl ContrastMode {
    /// Persisted / attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            ContrastMode::Normal => "normal",
            ContrastMode::High => "high",
        }
    }

    /// Anything but "high" reads as normal
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("high") => ContrastMode::High,
            _ => ContrastMode::Normal,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ContrastMode::Normal => ContrastMode::High,
            ContrastMode::High => ContrastMode::Normal,
        }
    }
}

impl std::fmt::Display for ContrastMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
