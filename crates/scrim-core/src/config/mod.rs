//! Modal configuration
//!
//! Configuration is stored as YAML.
//! Default location: ~/.config/scrim/config.yaml

mod io;

pub use io::{load_config, save_config, Validate};

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::{Interpolation, TimingConfig};
use crate::easing::Easing;

/// Show/hide animation duration used when nothing is configured
pub const DEFAULT_DURATION_MS: u64 = 200;

/// Animation and backdrop settings for one modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    /// Length of both the show and the hide animation in milliseconds
    pub duration_ms: u64,
    /// Curve used while growing in
    pub show_easing: Easing,
    /// Curve used while shrinking out
    pub hide_easing: Easing,
    /// Backdrop appearance
    pub backdrop: BackdropConfig,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            show_easing: Easing::OutExpo,
            hide_easing: Easing::InQuad,
            backdrop: BackdropConfig::default(),
        }
    }
}

impl Validate for ModalConfig {
    fn validate(&mut self) {
        self.backdrop.validate();
    }
}

impl ModalConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Timing toward fully shown (`true`) or fully hidden (`false`)
    pub fn timing(&self, show: bool) -> TimingConfig {
        TimingConfig {
            to: if show { 1.0 } else { 0.0 },
            duration: self.duration(),
            easing: if show { self.show_easing } else { self.hide_easing },
        }
    }

    /// Mapping from the scale value to backdrop opacity
    pub fn backdrop_interpolation(&self) -> Interpolation {
        Interpolation::new((0.0, 1.0), (0.0, self.backdrop.max_opacity))
    }
}

/// Backdrop layer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// RGB color (0.0-1.0 per channel)
    pub color: [f32; 3],
    /// Opacity reached when the modal is fully shown (0.0-1.0)
    pub max_opacity: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            color: [0.0, 0.0, 0.0],
            max_opacity: 1.0,
        }
    }
}

impl Validate for BackdropConfig {
    fn validate(&mut self) {
        self.max_opacity = self.max_opacity.clamp(0.0, 1.0);
        for channel in &mut self.color {
            *channel = channel.clamp(0.0, 1.0);
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/scrim/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scrim")
        .join("config.yaml")
}
