//! Frontend settings
//!
//! Startup options for the shell around the sim. Gameplay tuning lives
//! in [`crate::consts`] and is fixed at compile time; these only shape
//! the surface handed to the session and the HUD.

use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Shell configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Drawing surface dimensions handed to the session
    pub field_width: f32,
    pub field_height: f32,
    /// Fixed seed for reproducible runs; `None` derives one from the host
    pub seed: Option<u64>,
    /// Log an FPS readout while running
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            seed: None,
            show_fps: true,
        }
    }
}

impl Settings {
    /// Defaults overridden by `ORB_RUSH_*` environment variables
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Some(seed) = parse_var("ORB_RUSH_SEED") {
            settings.seed = Some(seed);
        }
        if let Some(width) = parse_var::<f32>("ORB_RUSH_WIDTH").filter(|w| w.is_finite()) {
            settings.field_width = width;
        }
        if let Some(height) = parse_var::<f32>("ORB_RUSH_HEIGHT").filter(|h| h.is_finite()) {
            settings.field_height = height;
        }
        if let Some(show) = parse_var("ORB_RUSH_SHOW_FPS") {
            settings.show_fps = show;
        }
        settings
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.parse().ok()
}
